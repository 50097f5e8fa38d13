//! Config loader: reads `~/.arogya/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.arogya/config.json`
//! 3. Environment variables `AROGYA_SARVAM__<FIELD>` (override JSON)
//!
//! The API key is resolved separately from `SARVAM_API_KEY`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::schema::{Config, SARVAM_API_KEY_ENV};

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_from_path(&config_path))
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `AROGYA_SARVAM__API_BASE` → `sarvam.api_base`
/// - `AROGYA_SARVAM__CHAT_MODEL` → `sarvam.chat_model`
/// - `AROGYA_SARVAM__TIMEOUT_SECS` → `sarvam.timeout_secs` (positive integer)
/// - `AROGYA_SARVAM__SCRATCH_DIR` → `sarvam.scratch_dir`
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides_with(config, |name| std::env::var(name).ok())
}

fn apply_overrides_with(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = lookup("AROGYA_SARVAM__API_BASE") {
        config.sarvam.api_base = val;
    }
    if let Some(val) = lookup("AROGYA_SARVAM__CHAT_MODEL") {
        config.sarvam.chat_model = val;
    }
    if let Some(val) = lookup("AROGYA_SARVAM__TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(n) if n > 0 => config.sarvam.timeout_secs = n,
            _ => warn!(value = %val, "ignoring invalid AROGYA_SARVAM__TIMEOUT_SECS"),
        }
    }
    if let Some(val) = lookup("AROGYA_SARVAM__SCRATCH_DIR") {
        config.sarvam.scratch_dir = Some(val);
    }

    config
}

/// Normalize a raw credential value: absent, empty, and whitespace-only
/// values are all treated as missing.
pub fn resolve_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

/// Read the Sarvam API key from `SARVAM_API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    resolve_api_key(std::env::var(SARVAM_API_KEY_ENV).ok())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
