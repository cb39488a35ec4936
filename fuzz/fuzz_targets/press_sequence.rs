//! Engine and reference model must agree on every press sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toycalc_core::CalculatorEngine;
use toycalc_harness::{ModelCalculator, Press};

fuzz_target!(|presses: Vec<Press>| {
    let mut model = ModelCalculator::default();
    let mut real = CalculatorEngine::new();

    for press in presses {
        assert_eq!(model.press(press), press.apply(&mut real), "{press:?}");
        assert_eq!(model.display(), real.display(), "{press:?}");
        assert!(real.state().input >= 0);
    }
});
