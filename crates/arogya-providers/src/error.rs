//! Error taxonomy for the Sarvam clients.
//!
//! [`ConfigError`] is fatal and surfaces from construction. [`ProviderError`]
//! never leaves a call: the public operations log it and fold it into an
//! [`arogya_core::Outcome::ProviderFailure`].

use thiserror::Error;

/// Construction-time misconfiguration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Sarvam API key not found. Set the {var} environment variable (or add it to .env).")]
    MissingApiKey { var: &'static str },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure of a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no choices in response")]
    NoChoices,

    #[error("first choice has no content")]
    EmptyContent,
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_variable() {
        let err = ConfigError::MissingApiKey {
            var: "SARVAM_API_KEY",
        };
        assert!(err.to_string().contains("SARVAM_API_KEY"));
    }

    #[test]
    fn test_status_message() {
        let err = ProviderError::Status {
            provider: "Sarvam speech-to-text",
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "rate limited".into(),
        };
        assert_eq!(
            err.to_string(),
            "Sarvam speech-to-text API returned 429 Too Many Requests: rate limited"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ProviderError = io.into();
        assert!(err.to_string().starts_with("file I/O failed"));
    }
}
