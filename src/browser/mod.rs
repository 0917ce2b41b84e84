//! Active-tab access and page-text extraction.
//!
//! The relay never talks to a page directly; it goes through [`Browser`], so
//! tests and alternate hosts can inject their own tab surface.

pub mod fetch;
pub mod mock;
pub mod text;

pub use fetch::FetchBrowser;
pub use mock::MockBrowser;

use crate::Result;
use async_trait::async_trait;

/// A browser tab, reduced to what summarization needs.
#[derive(Debug, Clone)]
pub struct Tab {
    pub url: String,
    pub title: Option<String>,
}

impl Tab {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }
}

#[async_trait]
pub trait Browser: Send + Sync {
    /// Resolve the active tab. Fails with [`crate::Error::Tab`] when there is
    /// none.
    async fn active_tab(&self) -> Result<Tab>;

    /// Read the rendered visible text of the tab's page. Fails with
    /// [`crate::Error::Extraction`] when the page cannot be read at all;
    /// a readable-but-empty page returns `Ok("")`.
    async fn page_text(&self, tab: &Tab) -> Result<String>;
}
