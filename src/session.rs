//! Popup-session state machine driving the relay.
//!
//! One session per popup open: a single initial summarization, then serial
//! follow-ups. A failed initial request halts the session for good; a failed
//! follow-up only consumes its own turn.

use crate::relay::Relay;
use crate::transcript::Transcript;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum SessionState {
    /// Created, initial summarization not yet sent.
    New,
    /// Summary received; follow-ups may be asked.
    Ready { transcript: Transcript },
    /// Initial summarization failed; the session is halted.
    Failed { error: String },
}

pub struct Session {
    relay: Relay,
    state: SessionState,
}

impl Session {
    /// A fresh session with an empty transcript.
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            state: SessionState::New,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        match &self.state {
            SessionState::Ready { transcript } => Some(transcript),
            _ => None,
        }
    }

    /// Send the initial summarization request. Success yields a one-turn
    /// transcript; failure halts the session.
    pub async fn start(&mut self) -> &SessionState {
        let reply = self.relay.handle_summarize().await;

        self.state = if reply.success {
            SessionState::Ready {
                transcript: Transcript::from_summary(reply.summary.unwrap_or_default()),
            }
        } else {
            SessionState::Failed {
                error: reply
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }
        };

        &self.state
    }

    /// Ask a follow-up question. The question and a pending placeholder join
    /// the transcript, the history (minus the placeholder) goes to the relay,
    /// and the placeholder resolves to the answer or the error message.
    ///
    /// Runs to completion before the next call; there is no cancellation.
    pub async fn ask(&mut self, question: &str) -> &SessionState {
        let transcript = match &self.state {
            SessionState::Ready { transcript } => transcript,
            _ => {
                warn!("Follow-up ignored: session is not ready");
                return &self.state;
            }
        };

        let with_pending = transcript.with_question(question);
        let history = with_pending.history();

        let reply = self.relay.handle_follow_up(history).await;
        let resolution = if reply.success {
            reply.answer.unwrap_or_default()
        } else {
            reply.error.unwrap_or_else(|| "Unknown error".to_string())
        };

        self.state = SessionState::Ready {
            transcript: with_pending.resolved(resolution),
        };
        &self.state
    }
}
