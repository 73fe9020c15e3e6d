//! Fuzzy resolution of free-text queries against the catalog.

use crate::catalog::{Catalog, Language};
use crate::score::{similarity, Score};

/// Resolves `query` against the catalog, returning confident matches ranked
/// best-first.
///
/// Every catalog entry is scored against the query; entries scoring below
/// `threshold` are dropped, and the survivors are sorted by descending score.
/// The sort is stable, so entries with equal scores keep their catalog order.
/// The result is always a duplicate-free subset of the catalog.
///
/// An empty query matches nothing, whatever the threshold.
#[must_use]
pub fn resolve(query: &str, catalog: &Catalog, threshold: Score) -> Vec<Language> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(Language, Score)> = catalog
        .iter()
        .map(|language| (language.clone(), similarity(query, language.as_str())))
        .collect();

    scored.retain(|(_, score)| *score >= threshold);
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored.into_iter().map(|(language, _)| language).collect()
}
