//! Typed request/reply contract between the UI controller and the relay.
//!
//! One request maps to exactly one reply; there is no event bus and no
//! partial delivery. The serde shapes match the original JSON action
//! messages byte for byte.

use crate::gemini::types::Content;
use serde::{Deserialize, Serialize};

/// An action request sent by the UI controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionRequest {
    /// Summarize the active tab. Carries no payload.
    SummarizePage,
    /// Ask a follow-up question with the accumulated conversation history,
    /// ordered oldest first.
    AskFollowUp { history: Vec<Content> },
}

/// Reply envelope for `summarizePage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummarizeReply {
    pub fn ok(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            summary: Some(summary.into()),
            error: None,
        }
    }

    pub fn err(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            summary: None,
            error: Some(error.to_string()),
        }
    }
}

/// Reply envelope for `askFollowUp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FollowUpReply {
    pub fn ok(answer: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: Some(answer.into()),
            error: None,
        }
    }

    pub fn err(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            answer: None,
            error: Some(error.to_string()),
        }
    }
}

/// Union of the per-action reply envelopes, as returned by
/// [`crate::relay::Relay::handle`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActionReply {
    Summary(SummarizeReply),
    Answer(FollowUpReply),
}
