//! Display listener registry.
//!
//! Each engine owns one registry. Listeners are plain closures called
//! synchronously, in registration order, with the new display string.

use std::fmt;

/// Handle returned when registering a listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&str)>;

/// Ordered set of display listeners.
#[derive(Default)]
pub struct DisplayListeners {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl DisplayListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is called after every later notification.
    pub fn add(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Call every listener with `display`, in registration order.
    pub fn notify(&mut self, display: &str) {
        for (_, listener) in &mut self.listeners {
            listener(display);
        }
    }
}

impl fmt::Debug for DisplayListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayListeners").field("len", &self.listeners.len()).finish()
    }
}
