//! HTTP API gateway for the Lingo language service.
//!
//! Exposes fuzzy language lookup and translation endpoints behind a
//! shared-secret header check.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
pub mod settings;
pub mod state;
