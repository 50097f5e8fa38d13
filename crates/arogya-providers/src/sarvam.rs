//! `SarvamManager`: one authenticated handle to the Sarvam APIs.
//!
//! Holds the subscription key and a pooled `reqwest::Client`. The client is
//! built once and shared across calls (and across clones of the manager),
//! so a single manager can serve concurrent callers.
//!
//! The operations themselves live next to their wire details:
//! [`crate::transcription`] (speech-to-text) and [`crate::vision`]
//! (wound analysis).

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, Span};

use arogya_core::config::{resolve_api_key, SarvamConfig, SARVAM_API_KEY_ENV};
use arogya_core::Outcome;

use crate::error::{ConfigError, ProviderError, ProviderResult};
use crate::traits::{SpeechToText, WoundAnalyzer};

/// Header carrying the subscription key on every request.
pub const API_KEY_HEADER: &str = "api-subscription-key";

// ─────────────────────────────────────────────
// SarvamManager
// ─────────────────────────────────────────────

#[derive(Clone)]
pub struct SarvamManager {
    /// HTTP client (shared, connection-pooled).
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) config: SarvamConfig,
    /// Span every call is recorded under.
    pub(crate) span: Span,
}

impl std::fmt::Debug for SarvamManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SarvamManager")
            .field("api_base", &self.config.api_base)
            .field("chat_model", &self.config.chat_model)
            .finish_non_exhaustive()
    }
}

impl SarvamManager {
    /// Create a manager using the key in `SARVAM_API_KEY`.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] if the variable is unset,
    /// empty, or whitespace.
    pub fn from_env(config: SarvamConfig) -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(SARVAM_API_KEY_ENV).ok(), config)
    }

    /// Create a manager with an explicit key. Same validation as [`Self::from_env`].
    pub fn new(api_key: &str, config: SarvamConfig) -> Result<Self, ConfigError> {
        Self::from_env_value(Some(api_key.to_string()), config)
    }

    fn from_env_value(raw: Option<String>, config: SarvamConfig) -> Result<Self, ConfigError> {
        let Some(api_key) = resolve_api_key(raw) else {
            error!(var = SARVAM_API_KEY_ENV, "Sarvam API key is missing");
            return Err(ConfigError::MissingApiKey {
                var: SARVAM_API_KEY_ENV,
            });
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(api_base = %config.api_base, "SarvamManager initialized");

        Ok(Self {
            client,
            api_key,
            config,
            span: tracing::info_span!("sarvam"),
        })
    }

    /// Record every call under `span` instead of the default `sarvam` span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn config(&self) -> &SarvamConfig {
        &self.config
    }

    /// Start an authenticated POST.
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
    }
}

/// Turn a non-2xx response into [`ProviderError::Status`], keeping the body.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
    provider: &'static str,
) -> ProviderResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(ProviderError::Status {
        provider,
        status,
        body,
    })
}

// ─────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────

#[async_trait]
impl SpeechToText for SarvamManager {
    async fn transcribe(&self, audio: &[u8]) -> Outcome {
        self.transcribe_hinglish(audio).await
    }

    fn display_name(&self) -> &str {
        "Sarvam Saaras"
    }
}

#[async_trait]
impl WoundAnalyzer for SarvamManager {
    async fn analyze(&self, image: &[u8]) -> Outcome {
        self.analyze_wound(image).await
    }

    fn display_name(&self) -> &str {
        "Sarvam Vision"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        for raw in [None, Some(String::new()), Some("   ".to_string())] {
            let err = SarvamManager::from_env_value(raw, SarvamConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::MissingApiKey {
                    var: "SARVAM_API_KEY"
                }
            ));
        }
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(SarvamManager::new("", SarvamConfig::default()).is_err());
        assert!(SarvamManager::new("\n\t", SarvamConfig::default()).is_err());
    }

    #[test]
    fn test_new_trims_key() {
        let manager = SarvamManager::new("  sk_test_123 ", SarvamConfig::default()).unwrap();
        assert_eq!(manager.api_key, "sk_test_123");
    }

    #[test]
    fn test_debug_hides_key() {
        let manager = SarvamManager::new("sk_secret_value", SarvamConfig::default()).unwrap();
        let debug = format!("{manager:?}");
        assert!(!debug.contains("sk_secret_value"));
        assert!(debug.contains("api.sarvam.ai"));
    }

    #[test]
    fn test_display_names() {
        let manager = SarvamManager::new("key", SarvamConfig::default()).unwrap();
        assert_eq!(SpeechToText::display_name(&manager), "Sarvam Saaras");
        assert_eq!(WoundAnalyzer::display_name(&manager), "Sarvam Vision");
    }

    #[test]
    fn test_with_span_keeps_config() {
        let config = SarvamConfig {
            chat_model: "custom".into(),
            ..Default::default()
        };
        let manager = SarvamManager::new("key", config)
            .unwrap()
            .with_span(tracing::info_span!("clinic", ward = "opd"));
        assert_eq!(manager.config().chat_model, "custom");
    }

    #[test]
    fn test_manager_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SarvamManager>();
    }
}
