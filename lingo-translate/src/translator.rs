//! Translation provider abstraction.
//!
//! Allows swapping the Google web-client backend for another provider (or a
//! test double) without changing the gateway.

use async_trait::async_trait;

use lingo_core::Language;

use crate::TranslateError;

/// A service that translates text into a destination language.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Short provider name, for logs.
    fn name(&self) -> &str;

    /// Translates `prompt` into `destination`, returning the translated text.
    ///
    /// The source language is detected by the provider.
    ///
    /// # Errors
    /// Returns [`TranslateError::UnknownLanguage`] if the destination has no
    /// provider code, [`TranslateError::Request`] if the service cannot be
    /// reached, and [`TranslateError::Api`] or
    /// [`TranslateError::MalformedResponse`] if it misbehaves.
    async fn translate(&self, prompt: &str, destination: &Language) -> Result<String, TranslateError>;
}
