use super::text::html_to_text;
use super::{Browser, Tab};
use crate::{Error, Result};
use async_trait::async_trait;

/// Browser surface for a process that owns no browser: the "active tab" is
/// the URL the process was launched with, and page text comes from fetching
/// that URL and reducing the HTML to visible text.
pub struct FetchBrowser {
    client: reqwest::Client,
    tab: Tab,
}

impl FetchBrowser {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            tab: Tab::new(url),
        }
    }
}

#[async_trait]
impl Browser for FetchBrowser {
    async fn active_tab(&self) -> Result<Tab> {
        Ok(self.tab.clone())
    }

    async fn page_text(&self, tab: &Tab) -> Result<String> {
        tracing::debug!("Fetching page content from {}", tab.url);

        let response = self.client.get(&tab.url).send().await.map_err(|e| {
            Error::Extraction(format!("Could not retrieve {}: {}", tab.url, e))
        })?;

        if !response.status().is_success() {
            return Err(Error::Extraction(format!(
                "Could not retrieve {}: status {}",
                tab.url,
                response.status().as_u16()
            )));
        }

        let html = response.text().await.map_err(|e| {
            Error::Extraction(format!("Could not read {}: {}", tab.url, e))
        })?;

        Ok(html_to_text(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_page_text_reduces_html() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><head><script>ignore()</script></head>\
                 <body><h1>Headline</h1><p>Body text.</p></body></html>",
            ))
            .mount(&server)
            .await;

        let browser = FetchBrowser::new(format!("{}/article", server.uri()), reqwest::Client::new());
        let tab = browser.active_tab().await.unwrap();

        let text = browser.page_text(&tab).await.unwrap();
        assert_eq!(text, "Headline\nBody text.");
    }

    #[tokio::test]
    async fn test_unreachable_page_is_extraction_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let browser = FetchBrowser::new(format!("{}/gone", server.uri()), reqwest::Client::new());
        let tab = browser.active_tab().await.unwrap();

        let err = browser.page_text(&tab).await.unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_active_tab_is_the_launch_url() {
        let browser = FetchBrowser::new("https://example.com/post", reqwest::Client::new());
        let tab = browser.active_tab().await.unwrap();
        assert_eq!(tab.url, "https://example.com/post");
    }
}
