//! Request orchestration between the UI surface and the language API.
//!
//! The relay owns no state across requests: credentials are re-read from the
//! injected store at the start of every request, and each action performs at
//! most one outbound API call with no retries.

use crate::browser::Browser;
use crate::gemini::types::{Content, FileData, GenerateContentRequest, Part};
use crate::gemini::GeminiClient;
use crate::protocol::{ActionReply, ActionRequest, FollowUpReply, SummarizeReply};
use crate::settings::SettingsStore;
use crate::{prompts, Error, Result};
use tracing::info;

/// Page text is truncated to this many characters before being embedded in a
/// summary request.
pub const MAX_PAGE_TEXT_CHARS: usize = 15_000;

pub struct Relay {
    settings: Box<dyn SettingsStore>,
    browser: Box<dyn Browser>,
    http: reqwest::Client,
    base_url: Option<String>,
}

impl Relay {
    pub fn new(settings: Box<dyn SettingsStore>, browser: Box<dyn Browser>) -> Self {
        Self::with_client(settings, browser, reqwest::Client::new())
    }

    /// Reuse an existing HTTP connection pool.
    pub fn with_client(
        settings: Box<dyn SettingsStore>,
        browser: Box<dyn Browser>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            settings,
            browser,
            http,
            base_url: None,
        }
    }

    /// Point outbound API calls at a different host. Primarily useful for
    /// integration tests and local harnesses.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Load credentials and build a client for this one request. Fails before
    /// any HTTP traffic when the credentials are incomplete.
    async fn api_client(&self) -> Result<GeminiClient> {
        let settings = self.settings.load().await?;
        settings.validate()?;

        let mut client = GeminiClient::new(settings.api_key, settings.model, self.http.clone());
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Ok(client)
    }

    /// Summarize the active tab: YouTube watch pages go by reference, every
    /// other page as extracted text.
    pub async fn summarize(&self) -> Result<String> {
        let client = self.api_client().await?;
        let tab = self.browser.active_tab().await?;

        let request = if is_youtube_watch_url(&tab.url) {
            info!("Summarizing video by reference: {}", tab.url);
            video_request(&tab.url)
        } else {
            info!("Summarizing page text: {}", tab.url);
            let text = self.browser.page_text(&tab).await?;
            if text.trim().is_empty() {
                return Err(Error::Extraction(
                    "Could not retrieve page content from this page".to_string(),
                ));
            }
            page_request(&text)
        };

        client.generate_content(&request).await
    }

    /// Answer a follow-up question. `history` is passed to the API unchanged
    /// and untruncated.
    pub async fn follow_up(&self, history: Vec<Content>) -> Result<String> {
        let client = self.api_client().await?;

        let request = GenerateContentRequest { contents: history };
        client.generate_content(&request).await
    }

    /// Verify the stored credentials with a minimal "Hello" request.
    pub async fn check_credentials(&self) -> Result<()> {
        let client = self.api_client().await?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::text("Hello")],
            }],
        };
        client.generate_content(&request).await.map(|_| ())
    }

    /// `summarizePage` as a single request/reply pair.
    pub async fn handle_summarize(&self) -> SummarizeReply {
        match self.summarize().await {
            Ok(summary) => SummarizeReply::ok(summary),
            Err(e) => SummarizeReply::err(e),
        }
    }

    /// `askFollowUp` as a single request/reply pair.
    pub async fn handle_follow_up(&self, history: Vec<Content>) -> FollowUpReply {
        match self.follow_up(history).await {
            Ok(answer) => FollowUpReply::ok(answer),
            Err(e) => FollowUpReply::err(e),
        }
    }

    /// Dispatch a typed action request to its reply envelope. Errors never
    /// escape as `Err`; they come back inside the envelope.
    pub async fn handle(&self, request: ActionRequest) -> ActionReply {
        match request {
            ActionRequest::SummarizePage => ActionReply::Summary(self.handle_summarize().await),
            ActionRequest::AskFollowUp { history } => {
                ActionReply::Answer(self.handle_follow_up(history).await)
            }
        }
    }
}

/// Matches desktop and mobile YouTube watch pages.
pub fn is_youtube_watch_url(url: &str) -> bool {
    url.contains("youtube.com/watch") || url.contains("m.youtube.com/watch")
}

fn video_request(url: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![
            Part::text(prompts::VIDEO_INSTRUCTION),
            Part::FileData {
                file_data: FileData {
                    mime_type: "video/youtube".to_string(),
                    file_uri: url.to_string(),
                },
            },
        ])],
    }
}

fn page_request(text: &str) -> GenerateContentRequest {
    let truncated: String = text.chars().take(MAX_PAGE_TEXT_CHARS).collect();

    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text(prompts::render(
            prompts::PAGE_SUMMARY,
            &[("content", &truncated)],
        ))])],
    }
}
