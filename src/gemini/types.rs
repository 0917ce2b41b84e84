//! Shared Gemini payload types used in both requests and responses.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// A `role: "user"` turn. Request turns always carry their role.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts,
        }
    }
}

/// Untagged union of text and file-reference content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FileData {
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// By-reference media payload. YouTube videos are passed this way rather than
/// as transcribed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub mime_type: String,
    pub file_uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Candidate completion item returned by Gemini. Blocked candidates can come
/// back without content.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

/// Provider error envelope carried on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_part_serializes_flat() {
        let json = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_file_data_part_uses_camel_case() {
        let part = Part::FileData {
            file_data: FileData {
                mime_type: "video/youtube".to_string(),
                file_uri: "https://www.youtube.com/watch?v=abc".to_string(),
            },
        };

        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fileData": {
                    "mimeType": "video/youtube",
                    "fileUri": "https://www.youtube.com/watch?v=abc"
                }
            })
        );
    }

    #[test]
    fn test_user_content_carries_role() {
        let content = Content::user(vec![Part::text("hi")]);
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "role": "user", "parts": [{ "text": "hi" }] })
        );
    }

    #[test]
    fn test_roleless_content_omits_role_key() {
        let content = Content {
            role: None,
            parts: vec![Part::text("hi")],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, serde_json::json!({ "parts": [{ "text": "hi" }] }));
    }

    #[test]
    fn test_response_without_candidates_still_parses() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#,
        )
        .unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_candidate_text_round_trips() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [{ "content": { "role": "model", "parts": [{ "text": "a summary" }] } }] }"#,
        )
        .unwrap();

        let content = response.candidates[0].content.as_ref().unwrap();
        assert!(matches!(&content.parts[0], Part::Text { text } if text == "a summary"));
    }

    #[test]
    fn test_api_error_body_parses_provider_shape() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{ "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" } }"#,
        )
        .unwrap();

        assert_eq!(body.error.message, "API key not valid");
    }
}
