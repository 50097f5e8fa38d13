//! Configuration system: schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use arogya_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("API base: {}", cfg.sarvam.api_base);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{api_key_from_env, get_config_path, load_config, resolve_api_key};
pub use schema::{Config, SarvamConfig, SARVAM_API_KEY_ENV};
