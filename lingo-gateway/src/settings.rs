//! Environment-driven service settings, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use lingo_core::{Catalog, CoreError, Score};

/// Bind address used when `LINGO_LISTEN_ADDR` is not set.
const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Errors that prevent the service from starting.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {name}")]
    MissingVariable { name: &'static str },

    /// The catalog variable did not yield any languages.
    #[error("invalid {name}: {source}")]
    InvalidCatalog {
        name: &'static str,
        source: CoreError,
    },

    /// The threshold variable is not an integer in `0..=100`.
    #[error("invalid {name}: expected an integer in 0..=100, got '{value}'")]
    InvalidThreshold { name: &'static str, value: String },

    /// The listen address cannot be parsed as `host:port`.
    #[error("invalid {name}: cannot parse '{value}' as a socket address")]
    InvalidListenAddr { name: &'static str, value: String },
}

/// Runtime configuration for the gateway.
///
/// Loaded from the environment exactly once, before the server starts.
/// Request handlers only ever see the immutable [`AppState`] built from it.
///
/// [`AppState`]: crate::state::AppState
#[derive(Debug, Clone)]
pub struct Settings {
    /// Languages the service recognises.
    pub catalog: Catalog,

    /// Shared secret expected in the `Authorization` header.
    pub api_key: String,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Minimum similarity score for fuzzy search results.
    pub threshold: Score,
}

impl Settings {
    /// Reads settings from the environment.
    ///
    /// `LINGO_LANGUAGES` (comma-separated names) and `LINGO_API_KEY` are
    /// required; `LINGO_LISTEN_ADDR` and `LINGO_MATCH_THRESHOLD` fall back to
    /// `127.0.0.1:8080` and 75.
    ///
    /// # Errors
    /// Returns a [`SettingsError`] naming the offending variable when a
    /// required variable is absent or a value cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        let raw_catalog = required("LINGO_LANGUAGES")?;
        let catalog = Catalog::from_delimited(&raw_catalog).map_err(|source| {
            SettingsError::InvalidCatalog {
                name: "LINGO_LANGUAGES",
                source,
            }
        })?;

        let api_key = required("LINGO_API_KEY")?;

        let listen_addr = match std::env::var("LINGO_LISTEN_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidListenAddr {
                name: "LINGO_LISTEN_ADDR",
                value: raw,
            })?,
            Err(_) => DEFAULT_LISTEN_ADDR,
        };

        let threshold = match std::env::var("LINGO_MATCH_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => Score::DEFAULT_THRESHOLD,
        };

        Ok(Self {
            catalog,
            api_key,
            listen_addr,
            threshold,
        })
    }
}

fn required(name: &'static str) -> Result<String, SettingsError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SettingsError::MissingVariable { name }),
    }
}

fn parse_threshold(raw: &str) -> Result<Score, SettingsError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(|value| Score::new(value).ok())
        .ok_or_else(|| SettingsError::InvalidThreshold {
            name: "LINGO_MATCH_THRESHOLD",
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so all scenarios run inside
    // one test to avoid races with parallel test threads.
    #[test]
    fn from_env_reads_validates_and_defaults() {
        std::env::set_var("LINGO_LANGUAGES", "Yoruba, hausa ,igbo");
        std::env::set_var("LINGO_API_KEY", "secret-token");
        std::env::set_var("LINGO_LISTEN_ADDR", "0.0.0.0:9090");
        std::env::set_var("LINGO_MATCH_THRESHOLD", "60");

        let settings = match Settings::from_env() {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(settings.catalog.len(), 3);
        assert!(settings.catalog.contains("yoruba"));
        assert_eq!(settings.api_key, "secret-token");
        assert_eq!(settings.listen_addr.port(), 9090);
        assert_eq!(settings.threshold.value(), 60);

        // Optional variables fall back to their defaults.
        std::env::remove_var("LINGO_LISTEN_ADDR");
        std::env::remove_var("LINGO_MATCH_THRESHOLD");
        let settings = match Settings::from_env() {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(settings.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(settings.threshold, Score::DEFAULT_THRESHOLD);

        // Out-of-range or non-numeric thresholds are rejected.
        std::env::set_var("LINGO_MATCH_THRESHOLD", "150");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::InvalidThreshold { .. })
        ));
        std::env::set_var("LINGO_MATCH_THRESHOLD", "not-a-number");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::InvalidThreshold { .. })
        ));
        std::env::remove_var("LINGO_MATCH_THRESHOLD");

        // An unparseable listen address is rejected.
        std::env::set_var("LINGO_LISTEN_ADDR", "not-an-address");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::InvalidListenAddr { .. })
        ));
        std::env::remove_var("LINGO_LISTEN_ADDR");

        // A missing or empty API key is a startup error.
        std::env::remove_var("LINGO_API_KEY");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::MissingVariable {
                name: "LINGO_API_KEY"
            })
        ));
        std::env::set_var("LINGO_API_KEY", "   ");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::MissingVariable {
                name: "LINGO_API_KEY"
            })
        ));
        std::env::set_var("LINGO_API_KEY", "secret-token");

        // A catalog with no usable tokens is a startup error.
        std::env::set_var("LINGO_LANGUAGES", " , ,");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::InvalidCatalog { .. })
        ));

        // A missing catalog variable is a startup error.
        std::env::remove_var("LINGO_LANGUAGES");
        assert!(matches!(
            Settings::from_env(),
            Err(SettingsError::MissingVariable {
                name: "LINGO_LANGUAGES"
            })
        ));

        std::env::remove_var("LINGO_API_KEY");
    }
}
