// Re-export modules
pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod format;
pub mod report;
pub mod server;
pub mod simulate;

// Re-export commonly used types for convenience
pub use client::AnalysisClient;
pub use config::ServerConfig;
pub use error::AnalysisError;
pub use format::{Block, format_report};
pub use server::{AnalyzeRequest, AnalyzeResponse};
pub use simulate::SimulatedAnalysis;
