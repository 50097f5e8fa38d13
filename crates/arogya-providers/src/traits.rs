//! Service traits: the seams callers depend on instead of a concrete client.

use async_trait::async_trait;

use arogya_core::Outcome;

/// Speech-to-text for mixed Hindi/English ("Hinglish") audio.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a WAV-encoded clip.
    ///
    /// Never fails: empty input, empty transcripts, and provider failures
    /// are all reported through the returned [`Outcome`].
    async fn transcribe(&self, audio: &[u8]) -> Outcome;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}

/// Clinical assessment of a wound photo.
#[async_trait]
pub trait WoundAnalyzer: Send + Sync {
    /// Assess a JPEG-compatible image for erythema, swelling, and infection.
    async fn analyze(&self, image: &[u8]) -> Outcome;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
