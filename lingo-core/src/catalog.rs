//! The language catalog: the fixed set of names the service recognises.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A supported language name, held in normalised form (trimmed, lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Language(String);

impl Language {
    /// Creates a `Language`, trimming surrounding whitespace and lowercasing.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_lowercase())
    }

    /// Returns the normalised name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The ordered set of languages the service recognises.
///
/// Built once at startup and never mutated afterwards. Entries are unique and
/// keep their load order, which is also the tie-break order the resolver
/// falls back on for equal scores.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexSet<Language>,
}

impl Catalog {
    /// Builds a catalog from any sequence of names.
    ///
    /// Every name is normalised; names that are empty after trimming are
    /// dropped, and duplicates keep their first position. The result may be
    /// empty.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(Language::new)
            .filter(|language| !language.as_str().is_empty())
            .collect();
        Self { entries }
    }

    /// Parses a comma-separated list of language names into a catalog.
    ///
    /// Tokens are trimmed and lowercased; empty tokens are dropped and
    /// duplicates keep their first position.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyCatalog`] if no usable token remains.
    pub fn from_delimited(raw: &str) -> Result<Self, CoreError> {
        let catalog = Self::new(raw.split(','));
        if catalog.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// Exact membership test, case-insensitive.
    ///
    /// Destination validation uses this: a destination must name a catalog
    /// entry exactly, never fuzzily.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(&Language::new(name))
    }

    /// Iterates over entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    /// Returns all entries in load order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Language> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_normalises_case_and_whitespace() {
        assert_eq!(Language::new("  Yoruba ").as_str(), "yoruba");
        assert_eq!(Language::new("FRENCH").as_str(), "french");
    }

    #[test]
    fn from_delimited_splits_and_normalises() {
        let catalog = match Catalog::from_delimited("Yoruba, hausa , IGBO") {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let names: Vec<&str> = catalog.iter().map(Language::as_str).collect();
        assert_eq!(names, ["yoruba", "hausa", "igbo"]);
    }

    #[test]
    fn from_delimited_drops_empty_tokens() {
        let catalog = match Catalog::from_delimited("yoruba,, hausa,  ,") {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_delimited_dedupes_keeping_first_position() {
        let catalog = match Catalog::from_delimited("yoruba, hausa, YORUBA, igbo") {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let names: Vec<&str> = catalog.iter().map(Language::as_str).collect();
        assert_eq!(names, ["yoruba", "hausa", "igbo"]);
    }

    #[test]
    fn from_delimited_rejects_blank_input() {
        assert!(Catalog::from_delimited("").is_err());
        assert!(Catalog::from_delimited("  ,  , ").is_err());
    }

    #[test]
    fn contains_is_case_insensitive_and_exact() {
        let catalog = Catalog::new(["yoruba", "hausa"]);
        assert!(catalog.contains("yoruba"));
        assert!(catalog.contains("YORUBA"));
        assert!(catalog.contains(" Hausa "));
        assert!(!catalog.contains("yorba"), "membership must never be fuzzy");
        assert!(!catalog.contains(""));
    }

    #[test]
    fn to_vec_preserves_load_order() {
        let catalog = Catalog::new(["swahili", "amharic", "zulu"]);
        let names: Vec<String> = catalog.to_vec().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["swahili", "amharic", "zulu"]);
    }

    #[test]
    fn empty_catalog_via_new_is_allowed() {
        let catalog = Catalog::new(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
