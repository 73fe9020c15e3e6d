//! Fuzz target: fuzzy similarity scoring.
//!
//! Verifies that arbitrary string pairs never panic the scorer and that
//! the score always stays on the 0..=100 scale, in both argument orders.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lingo_core::similarity;

fuzz_target!(|data: &[u8]| {
    let (left, right) = data.split_at(data.len() / 2);
    let left = String::from_utf8_lossy(left);
    let right = String::from_utf8_lossy(right);

    let forward = similarity(&left, &right);
    let backward = similarity(&right, &left);

    assert!(forward.value() <= 100, "score must stay on the 0..=100 scale");
    assert_eq!(forward, backward, "similarity must be symmetric");
});
