use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use scraper::{Html, Selector};
use serde_json::json;

use crate::error::AnalysisError;

/// Extracts the rendered visible text of a web page.
#[async_trait]
pub trait ExtractContent: Send + Sync {
    /// Returns the best-effort visible text of the page at `url`
    async fn extract(&self, url: &str) -> Result<String, AnalysisError>;
}

/// Extractor backed by a short-lived WebDriver browser session.
///
/// Every call opens a fresh session and closes it before returning,
/// on success and on failure, so no browser process outlives a request.
pub struct WebDriverExtractor {
    webdriver_url: String,
}

impl WebDriverExtractor {
    pub fn new(webdriver_url: String) -> Self {
        Self { webdriver_url }
    }

    /// Connects a new WebDriver session
    async fn connect(&self) -> Result<Client, AnalysisError> {
        // "eager" makes navigation return once the document structure has
        // loaded, without waiting for every subresource
        let mut capabilities = serde_json::Map::new();
        capabilities.insert("pageLoadStrategy".to_string(), json!("eager"));

        match ClientBuilder::native()
            .capabilities(capabilities)
            .connect(&self.webdriver_url)
            .await
        {
            Ok(client) => Ok(client),
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
                Err(AnalysisError::ExtractionFailed)
            }
        }
    }
}

#[async_trait]
impl ExtractContent for WebDriverExtractor {
    async fn extract(&self, url: &str) -> Result<String, AnalysisError> {
        let client = self.connect().await?;

        let outcome = read_page_text(&client, url).await;

        // Tear the session down on every exit path
        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        outcome
    }
}

/// Navigates to the URL and reads the rendered body text
async fn read_page_text(client: &Client, url: &str) -> Result<String, AnalysisError> {
    if let Err(e) = client.goto(url).await {
        ::log::error!("Failed to navigate to {}: {}", url, e);
        return Err(AnalysisError::ExtractionFailed);
    }

    match body_text(client).await {
        Ok(text) => Ok(text),
        Err(e) => {
            // The render-tree read can fail on pages that replace the body
            // mid-load; recover what we can from the raw source instead.
            ::log::debug!("Rendered text read failed for {}: {}", url, e);
            match client.source().await {
                Ok(html) => Ok(visible_text(&html)),
                Err(e) => {
                    ::log::error!("Failed to get page source for {}: {}", url, e);
                    Err(AnalysisError::ExtractionFailed)
                }
            }
        }
    }
}

/// Reads the visible text of the rendered body element
async fn body_text(client: &Client) -> Result<String, fantoccini::error::CmdError> {
    let body = client.find(Locator::Css("body")).await?;
    body.text().await
}

/// Extracts visible body text from raw HTML
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let body_selector = Selector::parse("body").unwrap();
    doc.select(&body_selector)
        .flat_map(|node| node.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_strips_markup() {
        let html = "<html><body><h1>Coffee Guide</h1><p>The best beans.</p></body></html>";
        assert_eq!(visible_text(html), "Coffee Guide The best beans.");
    }

    #[test]
    fn test_visible_text_normalizes_whitespace() {
        let html = "<html><body><p>  spaced \n   out\ttext  </p></body></html>";
        assert_eq!(visible_text(html), "spaced out text");
    }

    #[test]
    fn test_visible_text_empty_body() {
        let html = "<html><body></body></html>";
        assert_eq!(visible_text(html), "");
    }

    #[test]
    fn test_visible_text_nested_elements() {
        let html = "<html><body><div><ul><li>one</li><li>two</li></ul></div></body></html>";
        assert_eq!(visible_text(html), "one two");
    }
}
