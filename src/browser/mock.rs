use super::{Browser, Tab};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory browser surface for tests and harnesses.
#[derive(Clone)]
pub struct MockBrowser {
    tab: Arc<Mutex<Option<Tab>>>,
    page_texts: Arc<Mutex<Vec<String>>>,
    extraction_error: Arc<Mutex<Option<String>>>,
    tab_call_count: Arc<Mutex<usize>>,
    text_call_count: Arc<Mutex<usize>>,
}

impl MockBrowser {
    /// Starts out with no active tab; use `with_tab` to add one.
    pub fn new() -> Self {
        Self {
            tab: Arc::new(Mutex::new(None)),
            page_texts: Arc::new(Mutex::new(Vec::new())),
            extraction_error: Arc::new(Mutex::new(None)),
            tab_call_count: Arc::new(Mutex::new(0)),
            text_call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_tab(self, url: impl Into<String>) -> Self {
        *self.tab.lock().unwrap() = Some(Tab::new(url));
        self
    }

    pub fn with_page_text(self, text: impl Into<String>) -> Self {
        self.page_texts.lock().unwrap().push(text.into());
        self
    }

    /// Make every `page_text` call fail with an extraction error.
    pub fn with_extraction_error(self, message: impl Into<String>) -> Self {
        *self.extraction_error.lock().unwrap() = Some(message.into());
        self
    }

    pub fn get_tab_call_count(&self) -> usize {
        *self.tab_call_count.lock().unwrap()
    }

    pub fn get_text_call_count(&self) -> usize {
        *self.text_call_count.lock().unwrap()
    }
}

impl Default for MockBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Browser for MockBrowser {
    async fn active_tab(&self) -> Result<Tab> {
        let mut count = self.tab_call_count.lock().unwrap();
        *count += 1;

        self.tab
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Tab("Could not find an active tab".to_string()))
    }

    async fn page_text(&self, _tab: &Tab) -> Result<String> {
        let mut count = self.text_call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.extraction_error.lock().unwrap().clone() {
            return Err(Error::Extraction(message));
        }

        let texts = self.page_texts.lock().unwrap();
        if texts.is_empty() {
            Ok("Mock page text".to_string())
        } else {
            let index = (*count - 1) % texts.len();
            Ok(texts[index].clone())
        }
    }
}
