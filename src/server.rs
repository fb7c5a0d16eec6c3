use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::AnalysisError;
use crate::extractor::{ExtractContent, WebDriverExtractor};
use crate::report::{GeminiGenerator, GenerateReport};

/// 400 body when either required field is missing
pub const MISSING_FIELDS_ERROR: &str = "URL and target keyword are required.";

/// 500 body for failures not already converted to best-effort text
pub const ANALYSIS_FAILED_ERROR: &str = "Error analyzing the URL.";

/// Substitute page content when extraction fails
pub const EXTRACTION_FALLBACK: &str = "Could not extract content from the webpage.";

/// Suggestions text when the generation call itself fails
pub const GENERATION_FAILED_TEXT: &str = "There was an error generating SEO suggestions.";

/// Suggestions text when the generation API answers with an unexpected shape
pub const INVALID_RESPONSE_TEXT: &str = "Invalid response from Gemini API.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub target_keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub suggestions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared handler state: the two analysis stages behind their seams
#[derive(Clone)]
pub struct AppState {
    extractor: Arc<dyn ExtractContent>,
    generator: Arc<dyn GenerateReport>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn ExtractContent>, generator: Arc<dyn GenerateReport>) -> Self {
        Self {
            extractor,
            generator,
        }
    }
}

/// Builds the application router.
///
/// Only `allowed_origin` may call the analysis endpoint, with POST and a
/// JSON content type; everything else is refused by the CORS layer.
pub fn router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze_seo", post(analyze_seo))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

/// Runs the analysis server until the process is stopped
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let origin = config.allowed_origin.parse::<HeaderValue>()?;

    let state = AppState::new(
        Arc::new(WebDriverExtractor::new(config.webdriver_url)),
        Arc::new(GeminiGenerator::new(config.api_key)),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ::log::info!("Server running on http://{}", addr);

    axum::serve(listener, router(state, origin)).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /analyze_seo
async fn analyze_seo(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    if request.url.trim().is_empty() || request.target_keyword.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: MISSING_FIELDS_ERROR.to_string(),
            }),
        )
            .into_response();
    }

    match run_analysis(&state, &request).await {
        Ok(suggestions) => (StatusCode::OK, Json(AnalyzeResponse { suggestions })).into_response(),
        Err(error) => {
            ::log::error!("Error processing SEO analysis for {}: {}", request.url, error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: ANALYSIS_FAILED_ERROR.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Runs extraction then generation, converting each failure kind to its
/// fixed user-facing text so the caller still receives a 200.
///
/// Never returns `Err` today; the handler still maps `Err` to a 500.
async fn run_analysis(state: &AppState, request: &AnalyzeRequest) -> Result<String, AnalysisError> {
    let content = match state.extractor.extract(&request.url).await {
        Ok(content) => content,
        Err(error) => {
            ::log::error!(
                "Error extracting page content from {}: {}",
                request.url,
                error
            );
            EXTRACTION_FALLBACK.to_string()
        }
    };

    match state
        .generator
        .generate(&content, &request.target_keyword)
        .await
    {
        Ok(report) => Ok(report),
        Err(error) => {
            ::log::error!("Error generating report: {}", error);
            Ok(fallback_text(&error).to_string())
        }
    }
}

/// User-facing text for each failure kind. Only this boundary turns
/// error kinds into strings.
fn fallback_text(error: &AnalysisError) -> &'static str {
    match error {
        AnalysisError::MalformedUpstreamResponse => INVALID_RESPONSE_TEXT,
        AnalysisError::GenerationFailed | AnalysisError::ExtractionFailed => GENERATION_FAILED_TEXT,
    }
}
