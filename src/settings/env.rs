use super::{Settings, SettingsStore};
use crate::Result;
use async_trait::async_trait;

/// Reads `GEMINI_API_KEY` / `GEMINI_MODEL` from the environment (and `.env`).
pub struct EnvSettingsStore {
    model_override: Option<String>,
}

impl EnvSettingsStore {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        Self {
            model_override: None,
        }
    }

    /// Use `model` instead of whatever `GEMINI_MODEL` holds.
    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        self.model_override = model;
        self
    }
}

impl Default for EnvSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for EnvSettingsStore {
    async fn load(&self) -> Result<Settings> {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = match &self.model_override {
            Some(model) => model.clone(),
            None => std::env::var("GEMINI_MODEL").unwrap_or_default(),
        };

        Ok(Settings { api_key, model })
    }
}
