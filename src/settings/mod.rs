//! Credential storage behind an injectable repository seam.
//!
//! The relay reads credentials fresh at the start of every request; nothing
//! here caches a loaded value.

pub mod env;
pub mod mock;

pub use env::EnvSettingsStore;
pub use mock::MockSettingsStore;

use crate::{Error, Result};
use async_trait::async_trait;

/// Model identifiers the settings surface offers.
pub const SUPPORTED_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash"];

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

impl Settings {
    /// Both fields must be non-empty before a request may be built.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() || self.model.trim().is_empty() {
            return Err(Error::Config("API key or model is not set".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the stored credentials. May return incomplete settings; callers
    /// gate on [`Settings::validate`].
    async fn load(&self) -> Result<Settings>;
}
