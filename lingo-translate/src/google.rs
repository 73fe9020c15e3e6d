//! Google Translate web-client backend.
//!
//! Calls the public `translate_a/single` endpoint used by the web client.
//! The endpoint needs no API key but answers with a bare nested array rather
//! than a documented schema, so parsing is defensive.

use async_trait::async_trait;
use tracing::{debug, warn};

use lingo_core::Language;

use crate::config::TranslatorConfig;
use crate::error::TranslateError;
use crate::lang;
use crate::translator::Translator;

/// Translation client backed by the public Google Translate endpoint.
pub struct GoogleTranslate {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl GoogleTranslate {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    /// Returns [`TranslateError::Request`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, prompt: &str, destination: &Language) -> Result<String, TranslateError> {
        let code = lang::code_for(destination.as_str()).ok_or_else(|| {
            TranslateError::UnknownLanguage {
                language: destination.as_str().to_owned(),
            }
        })?;

        debug!(language = %destination, code, prompt_len = prompt.len(), "requesting translation");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", code),
                ("dt", "t"),
                ("q", prompt),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "translation request rejected");
            return Err(TranslateError::Api {
                status: status.as_u16(),
            });
        }

        let payload: serde_json::Value = response.json().await?;
        extract_translation(&payload).map_err(|e| {
            warn!(error = %e, "could not parse translation payload");
            e
        })
    }
}

/// Pulls the translated text out of the provider payload.
///
/// The translation is split across segments at `[0][*][0]`; segments are
/// concatenated in order.
fn extract_translation(payload: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = payload
        .get(0)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| TranslateError::MalformedResponse {
            reason: "missing segment array".to_owned(),
        })?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(serde_json::Value::as_str) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        return Err(TranslateError::MalformedResponse {
            reason: "no translation segments".to_owned(),
        });
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> serde_json::Value {
        match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => panic!("invalid test JSON: {e}"),
        }
    }

    #[test]
    fn extracts_single_segment() {
        let payload = parse(r#"[[["Bonjour","Hello",null,null,10]],null,"en"]"#);
        match extract_translation(&payload) {
            Ok(text) => assert_eq!(text, "Bonjour"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn concatenates_multiple_segments() {
        let payload = parse(
            r#"[[["Bonjour, ","Hello, "],["le monde !","world!"]],null,"en"]"#,
        );
        match extract_translation(&payload) {
            Ok(text) => assert_eq!(text, "Bonjour, le monde !"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn rejects_payload_without_segment_array() {
        assert!(extract_translation(&parse("{}")).is_err());
        assert!(extract_translation(&parse("[]")).is_err());
        assert!(extract_translation(&parse("null")).is_err());
    }

    #[test]
    fn rejects_payload_with_empty_segments() {
        assert!(extract_translation(&parse("[[]]")).is_err());
        assert!(extract_translation(&parse("[[[null]]]")).is_err());
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(GoogleTranslate::new(TranslatorConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn unknown_destination_fails_before_any_request() {
        let translator = match GoogleTranslate::new(TranslatorConfig::default()) {
            Ok(t) => t,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let result = translator.translate("hello", &Language::new("klingon")).await;
        match result {
            Err(TranslateError::UnknownLanguage { language }) => {
                assert_eq!(language, "klingon");
            }
            other => panic!("expected UnknownLanguage, got {other:?}"),
        }
    }
}
