// Extraction port - the one call the page makes to the backend.
//
// The core never sees HTTP types. Every way a call can fail is a variant of
// `ExtractionError`, so callers can match on it instead of guessing.

use super::extraction_models::{ExtractErrorCode, ExtractFilesResponse};
use async_trait::async_trait;
use thiserror::Error;

pub const FALLBACK_SERVICE_MESSAGE: &str = "Failed to extract files from folder.";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No base URL configured. Raised before any request is attempted.
    #[error("API base URL is not configured. Please set API_BASE_URL environment variable.")]
    NotConfigured,

    #[error("Could not reach the extraction service: {0}")]
    Transport(String),

    /// The service answered with a failure status and a structured error body.
    #[error("{}", service_message(.message))]
    Service {
        code: ExtractErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Failure status without a recognizable error body.
    #[error("Unexpected error from server while extracting folder.")]
    UnexpectedResponse { status: u16 },

    #[error("Failed to parse server response: {0}")]
    MalformedBody(String),
}

fn service_message(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_SERVICE_MESSAGE
    } else {
        message
    }
}

impl ExtractionError {
    /// Service error code, when the backend reported one.
    pub fn code(&self) -> Option<ExtractErrorCode> {
        match self {
            ExtractionError::Service { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// ============================================================================
// PORT
// ============================================================================

/// Anything that can turn a folder link or ID into a file listing.
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Issue exactly one extraction request. No retries.
    async fn extract(&self, folder_input: &str) -> Result<ExtractFilesResponse, ExtractionError>;
}
