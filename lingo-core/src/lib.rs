//! Core types for the Lingo translation gateway.
//!
//! Defines the fundamental domain types: the language catalog, similarity
//! scores, and the fuzzy resolver that ranks catalog entries against
//! free-text queries.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod score;

pub use catalog::{Catalog, Language};
pub use error::CoreError;
pub use resolver::resolve;
pub use score::{similarity, Score};
