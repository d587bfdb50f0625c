//! Fuzz target: JSON deserialization of upstream nexset payloads.
//!
//! Verifies that arbitrary byte sequences fed to the nexset parser never
//! cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nexbridge_core::Nexset;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    let _ = serde_json::from_slice::<Vec<Nexset>>(data);
    let _ = serde_json::from_slice::<Nexset>(data);
});
