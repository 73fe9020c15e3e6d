//! Translation providers for the Lingo gateway.
//!
//! Defines the [`Translator`] abstraction and the Google Translate
//! implementation that backs the `/translate` endpoint.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod google;
pub mod lang;
pub mod translator;

pub use config::TranslatorConfig;
pub use error::TranslateError;
pub use google::GoogleTranslate;
pub use translator::Translator;
