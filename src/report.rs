use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AnalysisError;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent";

/// Substituted as page content when extraction produced nothing usable
pub const PLACEHOLDER_CONTENT: &str = "This is a sample webpage discussing various topics.";

/// Returned when the API answered successfully but without any text part
pub const NO_RESPONSE_TEXT: &str = "No response from AI.";

/// Produces a natural-language SEO report for page text and a keyword.
#[async_trait]
pub trait GenerateReport: Send + Sync {
    async fn generate(&self, content: &str, keyword: &str) -> Result<String, AnalysisError>;
}

/// Report generator backed by the Gemini generateContent API
pub struct GeminiGenerator {
    api_key: String,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[async_trait]
impl GenerateReport for GeminiGenerator {
    async fn generate(&self, content: &str, keyword: &str) -> Result<String, AnalysisError> {
        let prompt = build_prompt(content, keyword);

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                ::log::error!("Error with Gemini API: {}", e);
                AnalysisError::GenerationFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            ::log::error!("Gemini API returned {}: {}", status.as_u16(), message);
            return Err(AnalysisError::GenerationFailed);
        }

        let data: GenerateResponse = response.json().await.map_err(|e| {
            ::log::error!("Failed to decode Gemini API response: {}", e);
            AnalysisError::MalformedUpstreamResponse
        })?;

        first_candidate_text(data)
    }
}

/// Renders the fixed report prompt for the given page text and keyword.
///
/// Blank or whitespace-only page text is replaced by the placeholder
/// sentence before the template is filled in.
pub fn build_prompt(content: &str, keyword: &str) -> String {
    let content = if content.trim().is_empty() {
        PLACEHOLDER_CONTENT
    } else {
        content
    };

    format!(
        r#"You are an SEO expert. Analyze the webpage content below and provide a structured SEO analysis for the keyword '{keyword}'.

### Page Content:
{content}

### Instructions:
- The analysis should be **structured** with **clear bullet points** for each key area.
- Cover the following aspects:
  - **Title Optimization**
  - **Keyword Placement**
  - **Meta Description**
  - **Header Structure (H1, H2, etc.)**
  - **Readability & Content Quality**
  - **Technical SEO (Page Speed, Mobile Optimization)**
- Provide **actionable suggestions** for each point.
- Write it in a **clear and professional SEO report style**.

### Example Output:
- **Title Optimization**: The title does not effectively use the keyword '{keyword}'. A more engaging title would be: "Discover the Best Strategies for '{keyword}' in 2024."
- **Keyword Placement**: The keyword appears only twice in the content. Ideally, it should be used in the first 100 words, H1 tags, and throughout the content naturally.
- **Meta Description**: The meta description should include '{keyword}' in a natural and compelling way to improve click-through rates.
- **Header Structure**: H1 and H2 tags should include the keyword to enhance on-page SEO.
- **Readability**: Sentences are too complex. Simplify them for better user experience.
- **Technical SEO**: Improve page speed by optimizing images and minifying CSS/JS."#
    )
}

/// Pulls the first candidate's text out of a decoded API response.
///
/// A response without a `candidates` field is malformed; a response with
/// candidates but no usable text falls back to [`NO_RESPONSE_TEXT`].
fn first_candidate_text(response: GenerateResponse) -> Result<String, AnalysisError> {
    let candidates = response
        .candidates
        .ok_or(AnalysisError::MalformedUpstreamResponse)?;

    let text = candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string());

    Ok(text)
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

// Response fields are optional so that shape drift upstream surfaces as a
// fallback string rather than a deserialization failure.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_keyword_and_content() {
        let prompt = build_prompt("A page all about roasting beans.", "coffee");

        assert!(prompt.contains("A page all about roasting beans."));
        // The template mandates the keyword in the instruction line and
        // three times in the worked example
        assert_eq!(prompt.matches("'coffee'").count(), 4);
    }

    #[test]
    fn test_prompt_substitutes_placeholder_for_blank_content() {
        for blank in ["", "   ", "\n\t  \n"] {
            let prompt = build_prompt(blank, "coffee");
            assert!(prompt.contains(PLACEHOLDER_CONTENT));
        }
    }

    #[test]
    fn test_prompt_keeps_content_verbatim() {
        let content = "Line one\nLine two";
        let prompt = build_prompt(content, "kw");
        assert!(prompt.contains(content));
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest::from_prompt("hello".to_string());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn test_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "**Title Optimization**: fine" } ] } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            first_candidate_text(response).unwrap(),
            "**Title Optimization**: fine"
        );
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        let response: GenerateResponse = serde_json::from_str(r#"{ "error": "quota" }"#).unwrap();
        assert_eq!(
            first_candidate_text(response),
            Err(AnalysisError::MalformedUpstreamResponse)
        );
    }

    #[test]
    fn test_empty_candidates_falls_back() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
        assert_eq!(first_candidate_text(response).unwrap(), NO_RESPONSE_TEXT);
    }

    #[test]
    fn test_candidate_without_text_falls_back() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ {} ] } } ] }"#,
        )
        .unwrap();
        assert_eq!(first_candidate_text(response).unwrap(), NO_RESPONSE_TEXT);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "" } ] } } ] }"#,
        )
        .unwrap();
        assert_eq!(first_candidate_text(response).unwrap(), NO_RESPONSE_TEXT);
    }
}
