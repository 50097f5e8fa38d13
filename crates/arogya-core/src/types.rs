//! Wire types for the Sarvam APIs.
//!
//! Chat completions follow the OpenAI message format; only the single-turn,
//! multipart user message used for vision is modelled. Speech-to-text responses are a flat
//! JSON object carrying the transcript.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Messages (OpenAI chat completions format)
// ─────────────────────────────────────────────

/// A chat message. Each variant maps to a `role` field value.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    #[serde(rename = "user")]
    User { content: Vec<ContentPart> },
}

impl Message {
    /// Create a user message with multipart content (text + images).
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Message::User { content: parts }
    }
}

/// A single part of a multipart message.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Inline image part built from an already base64-encoded payload.
    pub fn image_data(mime: &str, b64: &str) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:{mime};base64,{b64}"),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

// ─────────────────────────────────────────────
// Chat completion request / response
// ─────────────────────────────────────────────

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Raw chat completion response. Used internally for deserialization.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the provider returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

// ─────────────────────────────────────────────
// Speech-to-text
// ─────────────────────────────────────────────

/// Response body of `POST /speech-to-text`.
///
/// A missing `transcript` deserializes to the empty string.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub transcript: String,
    /// Language the provider detected (BCP-47, e.g. `"hi-IN"`).
    #[serde(default)]
    pub language_code: Option<String>,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vision_message_serialization() {
        let msg = Message::user_parts(vec![
            ContentPart::text("Describe this"),
            ContentPart::image_data("image/jpeg", "QUJD"),
        ]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [
                    { "type": "text", "text": "Describe this" },
                    { "type": "image_url", "image_url": { "url": "data:image/jpeg;base64,QUJD" } }
                ]
            })
        );
    }

    #[test]
    fn test_request_shape() {
        let req = ChatCompletionRequest {
            model: "sarvam-m".into(),
            messages: vec![Message::user_parts(vec![ContentPart::text("hi")])],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "sarvam-m",
                "messages": [{ "role": "user", "content": [{ "type": "text", "text": "hi" }] }]
            })
        );
    }

    #[test]
    fn test_first_content() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "message": { "content": "first" }, "finish_reason": "stop" },
                { "message": { "content": "second" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 1, "completion_tokens": 2, "total_tokens": 3 }
        }))
        .unwrap();
        assert_eq!(resp.first_content(), Some("first"));
        assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_first_content_missing() {
        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert_eq!(resp.first_content(), None);

        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": null }, "finish_reason": null }]
        }))
        .unwrap();
        assert_eq!(resp.first_content(), None);
    }

    #[test]
    fn test_transcription_response_missing_transcript() {
        let resp: TranscriptionResponse =
            serde_json::from_value(json!({ "request_id": "abc" })).unwrap();
        assert!(resp.transcript.is_empty());
        assert_eq!(resp.request_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_transcription_response_full() {
        let resp: TranscriptionResponse = serde_json::from_value(json!({
            "request_id": "r-1",
            "transcript": "ghar chalo",
            "language_code": "hi-IN"
        }))
        .unwrap();
        assert_eq!(resp.transcript, "ghar chalo");
        assert_eq!(resp.language_code.as_deref(), Some("hi-IN"));
    }
}
