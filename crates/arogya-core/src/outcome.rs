//! Tagged result of a speech or vision call.
//!
//! Every per-call condition (success, empty input, empty result, provider
//! failure) is a variant carrying the message shown to the caller. The
//! message strings are stable: `into_message()` yields exactly the text a
//! string-only caller expects, so callers that only display text keep
//! working while callers that branch on status match on the variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Returned by `transcribe_hinglish` for an empty audio buffer.
pub const EMPTY_AUDIO: &str = "Error: Empty audio buffer.";
/// Returned by `analyze_wound` for an empty image buffer.
pub const EMPTY_IMAGE: &str = "Error: No image provided.";
/// Returned when the provider answered but produced no transcript.
pub const NO_SPEECH: &str = "Could not detect any speech.";
/// Returned for any failure on the wound-analysis path. Carries no detail.
pub const WOUND_ANALYSIS_FAILED: &str =
    "Wound analysis failed. Please ensure the image is clear and try again.";
/// Prefix of transcription failure messages.
pub const SERVICE_ERROR_PREFIX: &str = "Service Error: ";

/// Outcome of a single provider call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The provider produced usable text, returned verbatim.
    Success(String),
    /// The caller passed an empty buffer; no provider call was made.
    EmptyInput(String),
    /// The provider answered successfully but with nothing usable.
    EmptyResult(String),
    /// File I/O, encoding, transport, or decoding failed.
    ProviderFailure(String),
}

/// Fieldless mirror of [`Outcome`], for status reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    EmptyInput,
    EmptyResult,
    ProviderFailure,
}

impl Outcome {
    /// Transcription failure, formatted as `"Service Error: {detail}"`.
    pub fn service_error(detail: impl fmt::Display) -> Self {
        Outcome::ProviderFailure(format!("{SERVICE_ERROR_PREFIX}{detail}"))
    }

    /// Wound-analysis failure. Always the generic message.
    pub fn wound_analysis_failed() -> Self {
        Outcome::ProviderFailure(WOUND_ANALYSIS_FAILED.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(m)
            | Outcome::EmptyInput(m)
            | Outcome::EmptyResult(m)
            | Outcome::ProviderFailure(m) => m,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Outcome::Success(m)
            | Outcome::EmptyInput(m)
            | Outcome::EmptyResult(m)
            | Outcome::ProviderFailure(m) => m,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success(_) => OutcomeKind::Success,
            Outcome::EmptyInput(_) => OutcomeKind::EmptyInput,
            Outcome::EmptyResult(_) => OutcomeKind::EmptyResult,
            Outcome::ProviderFailure(_) => OutcomeKind::ProviderFailure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutcomeKind::Success => "success",
            OutcomeKind::EmptyInput => "empty_input",
            OutcomeKind::EmptyResult => "empty_result",
            OutcomeKind::ProviderFailure => "provider_failure",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_format() {
        let outcome = Outcome::service_error("connection refused");
        assert_eq!(outcome.message(), "Service Error: connection refused");
        assert_eq!(outcome.kind(), OutcomeKind::ProviderFailure);
    }

    #[test]
    fn test_wound_failure_is_generic() {
        let outcome = Outcome::wound_analysis_failed();
        assert_eq!(
            outcome.into_message(),
            "Wound analysis failed. Please ensure the image is clear and try again."
        );
    }

    #[test]
    fn test_display_matches_message() {
        let outcome = Outcome::Success("ghar chalo".into());
        assert_eq!(outcome.to_string(), "ghar chalo");
        assert!(outcome.is_success());
        assert!(!Outcome::EmptyResult(NO_SPEECH.into()).is_success());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let value = serde_json::to_value(OutcomeKind::EmptyInput).unwrap();
        assert_eq!(value, "empty_input");
        assert_eq!(OutcomeKind::ProviderFailure.to_string(), "provider_failure");
    }
}
