//! Wound assessment via Sarvam chat completions with an inline image.
//!
//! The image is base64-encoded in memory and sent as a `data:` URI next to
//! a fixed clinical prompt. Nothing touches disk.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, error, Instrument};

use arogya_core::outcome::EMPTY_IMAGE;
use arogya_core::types::{ChatCompletionRequest, ChatCompletionResponse, ContentPart, Message};
use arogya_core::Outcome;

use crate::error::{ProviderError, ProviderResult};
use crate::sarvam::{ensure_success, SarvamManager};

const PROVIDER: &str = "Sarvam chat";

/// Instruction sent with every wound image.
pub const CLINICAL_PROMPT: &str = "Identify signs of Erythema (redness), swelling, or infection. \
     Rate severity from 1-10 and provide recovery advice.";

/// Build the single-turn, two-part vision request for `image`.
pub fn build_wound_request(model: &str, image: &[u8]) -> ChatCompletionRequest {
    let b64 = STANDARD.encode(image);
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![Message::user_parts(vec![
            ContentPart::text(CLINICAL_PROMPT),
            ContentPart::image_data("image/jpeg", &b64),
        ])],
    }
}

impl SarvamManager {
    /// Assess a wound photo for erythema, swelling, or infection.
    ///
    /// Returns the model's first answer verbatim. Empty input yields
    /// `"Error: No image provided."` without a request; every failure
    /// yields the generic `"Wound analysis failed. ..."` message, with the
    /// detail only in the logs.
    pub async fn analyze_wound(&self, image: &[u8]) -> Outcome {
        async move {
            if image.is_empty() {
                return Outcome::EmptyInput(EMPTY_IMAGE.to_string());
            }

            match self.request_analysis(image).await {
                Ok(analysis) => Outcome::Success(analysis),
                Err(e) => {
                    error!(error = %e, "vision service failure");
                    Outcome::wound_analysis_failed()
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    async fn request_analysis(&self, image: &[u8]) -> ProviderResult<String> {
        let request = build_wound_request(&self.config.chat_model, image);

        debug!(
            model = %request.model,
            image_bytes = image.len(),
            "analyzing wound image via Sarvam"
        );

        let response = self
            .post(&self.config.chat_completions_url())
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response, PROVIDER).await?;

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;

        if parsed.choices.is_empty() {
            return Err(ProviderError::NoChoices);
        }
        let content = parsed
            .first_content()
            .ok_or(ProviderError::EmptyContent)?
            .to_string();

        debug!(
            chars = content.chars().count(),
            finish_reason = parsed.choices[0].finish_reason.as_deref().unwrap_or("?"),
            "wound analysis received"
        );

        Ok(content)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
