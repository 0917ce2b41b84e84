//! Client and payload types for the generative-language `generateContent` API.

pub mod client;
pub mod types;

pub use client::GeminiClient;
