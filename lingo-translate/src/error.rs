//! Error types for the translation crate.

/// Errors that can occur while translating text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// The destination language has no known provider language code.
    #[error("no translation code known for language '{language}'")]
    UnknownLanguage { language: String },

    /// The request to the translation service could not be completed.
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The translation service answered with a non-success status.
    #[error("translation service returned status {status}")]
    Api { status: u16 },

    /// The translation service answered 200 but the payload was not in the
    /// expected shape.
    #[error("malformed translation response: {reason}")]
    MalformedResponse { reason: String },
}
