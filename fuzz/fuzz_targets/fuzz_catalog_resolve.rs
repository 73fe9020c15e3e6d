//! Fuzz target: catalog parsing and fuzzy resolution.
//!
//! Feeds an arbitrary query against an arbitrary comma-delimited catalog and
//! verifies that resolution never panics and only ever returns catalog
//! entries.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lingo_core::{resolve, Catalog, Score};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let (query, raw_catalog) = match input.split_once('\n') {
        Some(parts) => parts,
        None => (input.as_ref(), ""),
    };

    let catalog = Catalog::new(raw_catalog.split(','));
    let matches = resolve(query, &catalog, Score::DEFAULT_THRESHOLD);

    assert!(matches.len() <= catalog.len(), "cannot match more entries than exist");
    for language in &matches {
        assert!(
            catalog.contains(language.as_str()),
            "resolution must only return catalog entries"
        );
    }
});
