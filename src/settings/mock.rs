use super::{Settings, SettingsStore};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory settings store for tests and harnesses.
#[derive(Clone)]
pub struct MockSettingsStore {
    api_key: String,
    model: String,
    load_count: Arc<Mutex<usize>>,
}

impl MockSettingsStore {
    /// Starts out with no credentials at all.
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            model: String::new(),
            load_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn get_load_count(&self) -> usize {
        *self.load_count.lock().unwrap()
    }
}

impl Default for MockSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn load(&self) -> Result<Settings> {
        let mut count = self.load_count.lock().unwrap();
        *count += 1;

        Ok(Settings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_counts_loads() {
        let store = MockSettingsStore::new()
            .with_api_key("key")
            .with_model("gemini-2.5-pro");

        assert_eq!(store.get_load_count(), 0);

        let settings = store.load().await.unwrap();
        assert_eq!(settings.model, "gemini-2.5-pro");
        assert_eq!(store.get_load_count(), 1);

        store.load().await.unwrap();
        assert_eq!(store.get_load_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_store_defaults_to_empty_credentials() {
        let store = MockSettingsStore::new();
        let settings = store.load().await.unwrap();
        assert!(settings.validate().is_err());
    }
}
