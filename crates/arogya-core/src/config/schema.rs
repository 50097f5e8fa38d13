//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! The API key is not part of the schema; it is read from the
//! `SARVAM_API_KEY` environment variable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable holding the Sarvam subscription key.
pub const SARVAM_API_KEY_ENV: &str = "SARVAM_API_KEY";

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration: loaded from `~/.arogya/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sarvam: SarvamConfig,
}

// ─────────────────────────────────────────────
// Sarvam
// ─────────────────────────────────────────────

/// Endpoint and request settings for the Sarvam APIs.
///
/// The speech-to-text model, language, and mode are fixed constants in
/// `arogya_providers::transcription`, not configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SarvamConfig {
    /// API base URL, without a trailing path.
    pub api_base: String,
    /// Chat/vision model.
    pub chat_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Directory for scratch audio files. Defaults to the OS temp dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<String>,
}

impl Default for SarvamConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.sarvam.ai".to_string(),
            chat_model: "sarvam-m".to_string(),
            timeout_secs: 60,
            scratch_dir: None,
        }
    }
}

impl SarvamConfig {
    /// `{api_base}/speech-to-text`
    pub fn speech_to_text_url(&self) -> String {
        format!("{}/speech-to-text", self.api_base.trim_end_matches('/'))
    }

    /// `{api_base}/v1/chat/completions`
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'))
    }

    /// Resolved scratch directory (`~` expanded).
    pub fn scratch_dir_path(&self) -> PathBuf {
        match &self.scratch_dir {
            Some(dir) if !dir.trim().is_empty() => crate::utils::expand_home(dir),
            _ => std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SarvamConfig::default();
        assert_eq!(cfg.chat_model, "sarvam-m");
        assert_eq!(cfg.timeout_secs, 60);
    }

    #[test]
    fn test_urls_trailing_slash() {
        let cfg = SarvamConfig {
            api_base: "https://api.sarvam.ai/".into(),
            ..Default::default()
        };
        assert_eq!(cfg.speech_to_text_url(), "https://api.sarvam.ai/speech-to-text");
        assert_eq!(
            cfg.chat_completions_url(),
            "https://api.sarvam.ai/v1/chat/completions"
        );
    }

    #[test]
    fn test_scratch_dir_default_is_temp() {
        let cfg = SarvamConfig::default();
        assert_eq!(cfg.scratch_dir_path(), std::env::temp_dir());

        let cfg = SarvamConfig {
            scratch_dir: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.scratch_dir_path(), std::env::temp_dir());
    }

    #[test]
    fn test_scratch_dir_override() {
        let cfg = SarvamConfig {
            scratch_dir: Some("/var/tmp/arogya".into()),
            ..Default::default()
        };
        assert_eq!(cfg.scratch_dir_path(), PathBuf::from("/var/tmp/arogya"));
    }

    #[test]
    fn test_camel_case_keys() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert!(value["sarvam"].get("apiBase").is_some());
        assert!(value["sarvam"].get("timeoutSecs").is_some());
        assert!(value["sarvam"].get("scratchDir").is_none());
        assert!(value["sarvam"].get("apiKey").is_none());
    }
}
