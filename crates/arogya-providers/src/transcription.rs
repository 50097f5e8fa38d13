//! Hinglish speech-to-text via Sarvam's `/speech-to-text` endpoint.
//!
//! The API takes a file upload, so each call stages the audio in a scratch
//! `.wav` file. Every call gets its own uniquely named file, removed when
//! the call finishes whatever the result.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn, Instrument};

use arogya_core::outcome::{EMPTY_AUDIO, NO_SPEECH};
use arogya_core::types::TranscriptionResponse;
use arogya_core::Outcome;

use crate::error::ProviderResult;
use crate::sarvam::{ensure_success, SarvamManager};

const PROVIDER: &str = "Sarvam speech-to-text";

/// Speech-to-text model.
pub const STT_MODEL: &str = "saaras:v3";
/// Language hint; `"unknown"` lets the provider auto-detect.
pub const LANGUAGE_CODE: &str = "unknown";
/// Keeps Hindi and English words as spoken.
pub const MODE: &str = "codemix";

// ─────────────────────────────────────────────
// Scratch file
// ─────────────────────────────────────────────

/// A uniquely named `.wav` file that is deleted when dropped.
struct ScratchAudio {
    file: NamedTempFile,
}

impl ScratchAudio {
    async fn create(dir: &Path, audio: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let file = tempfile::Builder::new()
            .prefix("arogya-audio-")
            .suffix(".wav")
            .tempfile_in(dir)?;
        tokio::fs::write(file.path(), audio).await?;
        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }

    fn file_name(&self) -> String {
        self.path()
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// Delete now and report failures; dropping also deletes, silently.
    fn close(self) {
        let path: PathBuf = self.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!(path = %path.display(), error = %e, "failed to remove scratch audio file");
        }
    }
}

// ─────────────────────────────────────────────
// SarvamManager: speech-to-text
// ─────────────────────────────────────────────

impl SarvamManager {
    /// Transcribe mixed Hindi/English speech.
    ///
    /// - empty buffer → [`Outcome::EmptyInput`] (`"Error: Empty audio buffer."`), no request made
    /// - non-empty transcript → [`Outcome::Success`] with the transcript verbatim
    /// - empty transcript → [`Outcome::EmptyResult`] (`"Could not detect any speech."`)
    /// - any failure → [`Outcome::ProviderFailure`] (`"Service Error: {detail}"`)
    pub async fn transcribe_hinglish(&self, audio: &[u8]) -> Outcome {
        async move {
            if audio.is_empty() {
                return Outcome::EmptyInput(EMPTY_AUDIO.to_string());
            }

            match self.request_transcript(audio).await {
                Ok(transcript) if !transcript.is_empty() => Outcome::Success(transcript),
                Ok(_) => Outcome::EmptyResult(NO_SPEECH.to_string()),
                Err(e) => {
                    error!(error = %e, "speech-to-text failure");
                    Outcome::service_error(e)
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    async fn request_transcript(&self, audio: &[u8]) -> ProviderResult<String> {
        let scratch = ScratchAudio::create(&self.config.scratch_dir_path(), audio).await?;
        let result = self.submit_audio(&scratch).await;
        scratch.close();
        result
    }

    async fn submit_audio(&self, scratch: &ScratchAudio) -> ProviderResult<String> {
        let file_bytes = tokio::fs::read(scratch.path()).await?;

        debug!(
            bytes = file_bytes.len(),
            model = STT_MODEL,
            mode = MODE,
            "transcribing audio via Sarvam"
        );

        let file_part = Part::bytes(file_bytes)
            .file_name(scratch.file_name())
            .mime_str("audio/wav")?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", STT_MODEL)
            .text("language_code", LANGUAGE_CODE)
            .text("mode", MODE);

        let response = self
            .post(&self.config.speech_to_text_url())
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response, PROVIDER).await?;

        let body = response.text().await?;
        let parsed: TranscriptionResponse = serde_json::from_str(&body)?;

        debug!(
            chars = parsed.transcript.chars().count(),
            language = parsed.language_code.as_deref().unwrap_or("?"),
            request_id = parsed.request_id.as_deref().unwrap_or("?"),
            "transcription complete"
        );

        Ok(parsed.transcript)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
