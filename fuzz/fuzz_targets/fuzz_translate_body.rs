//! Fuzz target: JSON deserialization of `TranslateBody`.
//!
//! Verifies that arbitrary byte sequences fed to the JSON parser never cause
//! panics or unbounded resource consumption. Errors are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lingo_gateway::routes::TranslateBody;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<TranslateBody>(data);
});
