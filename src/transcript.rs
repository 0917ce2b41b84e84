//! Immutable conversation transcript.
//!
//! Every mutation returns a new value, so the session state machine threads
//! transcripts through explicitly instead of mutating a shared history in
//! place. The pending placeholder turn is part of the visible transcript but
//! is never part of the derived API history.

use crate::gemini::types::{Content, Part};
use serde::{Deserialize, Serialize};

/// Placeholder content shown while a follow-up answer is in flight.
pub const PENDING: &str = "… thinking …";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered conversation turns, oldest first. When `pending` is set, the last
/// turn is the in-flight placeholder.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript holding the initial summary as a single model turn.
    pub fn from_summary(summary: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn {
                role: Role::Model,
                content: summary.into(),
            }],
            pending: false,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn with_turn(&self, role: Role, content: impl Into<String>) -> Self {
        let mut turns = self.turns.clone();
        turns.push(Turn {
            role,
            content: content.into(),
        });
        Self {
            turns,
            pending: self.pending,
        }
    }

    /// Append a user question plus the pending model placeholder.
    pub fn with_question(&self, question: impl Into<String>) -> Self {
        let mut turns = self.turns.clone();
        turns.push(Turn {
            role: Role::User,
            content: question.into(),
        });
        turns.push(Turn {
            role: Role::Model,
            content: PENDING.to_string(),
        });
        Self {
            turns,
            pending: true,
        }
    }

    /// Replace the pending placeholder with the final answer (or an error
    /// message standing in for one). No-op when nothing is pending.
    pub fn resolved(&self, answer: impl Into<String>) -> Self {
        if !self.pending {
            return self.clone();
        }

        let mut turns = self.turns.clone();
        if let Some(last) = turns.last_mut() {
            last.content = answer.into();
        }
        Self {
            turns,
            pending: false,
        }
    }

    /// Derive the API history: one entry per turn, original role, a single
    /// text part. The pending placeholder is excluded; it must never reach
    /// the API.
    pub fn history(&self) -> Vec<Content> {
        let visible = if self.pending {
            &self.turns[..self.turns.len() - 1]
        } else {
            &self.turns[..]
        };

        visible
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part::text(turn.content.clone())],
            })
            .collect()
    }

    /// Plain-text rendering of the visible chat. Pure function of the value:
    /// rendering twice yields identical output.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| match turn.role {
                Role::User => format!("You: {}", turn.content),
                Role::Model => turn.content.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
