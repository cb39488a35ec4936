//! Arbitrary text must never panic the keypad parser or the app.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toycalc_app::{App, AppEvent};

fuzz_target!(|script: &str| {
    let mut app = App::default();
    app.handle(AppEvent::Text(script.to_owned()));
    let _ = app.display();
});
