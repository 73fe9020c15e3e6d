//! Shared request-handling state.

use std::sync::Arc;

use lingo_core::{Catalog, Score};
use lingo_translate::Translator;

use crate::settings::Settings;

/// Shared state for gateway handlers.
///
/// Everything here is built once in `main` and immutable afterwards, so
/// cloning per request is cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// The language catalog loaded at startup.
    pub catalog: Arc<Catalog>,

    /// Shared secret expected in the `Authorization` header.
    pub api_key: Arc<str>,

    /// Minimum similarity score for fuzzy search results.
    pub threshold: Score,

    /// Translation provider behind the `/translate` endpoint.
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    /// Builds state from loaded settings and a translation provider.
    #[must_use]
    pub fn new(settings: Settings, translator: Arc<dyn Translator>) -> Self {
        Self {
            catalog: Arc::new(settings.catalog),
            api_key: settings.api_key.into(),
            threshold: settings.threshold,
            translator,
        }
    }
}
