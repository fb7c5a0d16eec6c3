use thiserror::Error;

/// Failure kinds for the extraction-and-report flow.
///
/// Every variant is converted to a fixed human-readable string at the
/// presentation boundary; callers never see these as HTTP-level errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The page could not be navigated to or its text could not be read
    #[error("could not extract content from the webpage")]
    ExtractionFailed,

    /// The generation API call failed (transport error or non-2xx status)
    #[error("report generation request failed")]
    GenerationFailed,

    /// The generation API answered 2xx with an unexpected body shape
    #[error("unexpected response shape from the generation API")]
    MalformedUpstreamResponse,
}
