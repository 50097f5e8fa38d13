//! Sarvam AI clients for Arogya.
//!
//! # Architecture
//!
//! - [`sarvam::SarvamManager`]: credentialed handle; construction fails fast without `SARVAM_API_KEY`
//! - [`transcription`]: Hinglish speech-to-text (`saaras:v3`, `codemix`)
//! - [`vision`]: wound assessment through chat completions with an inline image
//! - [`traits`]: `SpeechToText` / `WoundAnalyzer` seams for callers and tests
//!
//! Per-call failures never escape as errors: both operations return an
//! [`arogya_core::Outcome`].

pub mod error;
pub mod sarvam;
pub mod traits;
pub mod transcription;
pub mod vision;

pub use error::{ConfigError, ProviderError};
pub use sarvam::SarvamManager;
pub use traits::{SpeechToText, WoundAnalyzer};
