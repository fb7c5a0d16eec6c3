use thiserror::Error;

use crate::server::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};

/// Shown when the server's error body could not be read
const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

/// Ways a client-side analysis attempt can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never reached the server
    #[error("Failed to connect to the server.")]
    ConnectFailed,

    /// The server answered with its own error string, surfaced verbatim
    #[error("{0}")]
    Server(String),
}

/// Thin client for a running analysis server
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Requests suggestions for a URL/keyword pair.
    ///
    /// The returned text is opaque report content; rendering it is the
    /// caller's concern (see [`crate::format::format_report`]).
    pub async fn fetch_suggestions(&self, url: &str, keyword: &str) -> Result<String, ClientError> {
        let request = AnalyzeRequest {
            url: url.to_string(),
            target_keyword: keyword.to_string(),
        };

        let response = self
            .http
            .post(format!(
                "{}/analyze_seo",
                self.endpoint.trim_end_matches('/')
            ))
            .json(&request)
            .send()
            .await
            .map_err(|_| ClientError::ConnectFailed)?;

        if response.status().is_success() {
            let body: AnalyzeResponse = response
                .json()
                .await
                .map_err(|_| ClientError::ConnectFailed)?;
            Ok(body.suggestions)
        } else {
            let error = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| GENERIC_SERVER_ERROR.to_string());
            Err(ClientError::Server(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_failed_message() {
        assert_eq!(
            ClientError::ConnectFailed.to_string(),
            "Failed to connect to the server."
        );
    }

    #[test]
    fn test_server_error_surfaced_verbatim() {
        let error = ClientError::Server("URL and target keyword are required.".to_string());
        assert_eq!(error.to_string(), "URL and target keyword are required.");
    }
}
