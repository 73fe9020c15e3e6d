//! Translation client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoint used when none is configured: the public web-client API.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// User agent sent when none is configured. The web-client API rejects
/// requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the Google translation client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TranslatorConfig {
    /// Base URL of the translation endpoint.
    pub endpoint: String,

    /// Timeout for a single translation request.
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl TranslatorConfig {
    /// Creates a config pointing at the public endpoint with a 10 second
    /// timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_public_endpoint() {
        let config = TranslatorConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.user_agent.is_empty());
    }
}
