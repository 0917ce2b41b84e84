use super::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse, Part};
use crate::{Error, Result};
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client for the `generateContent` endpoint.
///
/// Performs exactly one outbound HTTP call per invocation; no retries.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Construct a client.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(api_key: String, model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Primarily useful for tests and
    /// local harnesses.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Calls `generateContent` and resolves the response to candidate text.
    ///
    /// Response handling is strict and ordered: non-2xx statuses surface the
    /// provider error message when the body parses (a generic status-code
    /// message otherwise), then empty bodies, then unparsable bodies, then
    /// safety blocks, then contentless responses.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!("Sending generateContent request (model: {})", self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error (status {})", status);
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => Error::Api {
                    status,
                    message: parsed.error.message,
                },
                Err(_) => Error::ApiStatus(status),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let data: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            Error::MalformedResponse(e.to_string())
        })?;

        if let Some(text) = Self::extract_text(&data) {
            return Ok(text);
        }

        if let Some(reason) = data.prompt_feedback.and_then(|f| f.block_reason) {
            tracing::warn!("Request blocked by the API: {}", reason);
            return Err(Error::SafetyBlock(reason));
        }

        Err(Error::NoContent)
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content.parts.iter().find_map(|p| match p {
                    Part::Text { text } => Some(text.clone()),
                    Part::FileData { .. } => None,
                })
            })
    }
}
