//! tabdigest - summarize the active tab and chat about it
//!
//! Summarizes a webpage (or a YouTube video, passed by reference) through the
//! Gemini `generateContent` API, then answers follow-up questions over the
//! accumulated conversation history. One outbound API call per user action;
//! no retries, no streaming.

pub mod browser;
pub mod error;
pub mod gemini;
pub mod prompts;
pub mod protocol;
pub mod relay;
pub mod session;
pub mod settings;
pub mod transcript;

pub use error::{Error, Result};
