use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::json;

use super::api_config::ApiConfig;
use crate::core::extraction::{
    ErrorResponseBody, ExtractFilesResponse, ExtractionClient, ExtractionError,
};

/// HTTP client for the extraction backend. One POST per call, no retries,
/// no timeout.
pub struct HttpExtractionClient {
    client: Client,
    config: ApiConfig,
}

impl HttpExtractionClient {
    pub fn new(config: ApiConfig) -> Result<Self, ExtractionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("DriveFolderClient/0.1"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ExtractionError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Map a finished response onto the result or one of the error variants.
    ///
    /// Kept free of I/O so every branch can be tested without a server.
    fn interpret_response(
        status: StatusCode,
        body: &str,
    ) -> Result<ExtractFilesResponse, ExtractionError> {
        if !status.is_success() {
            return match serde_json::from_str::<ErrorResponseBody>(body) {
                Ok(payload) => Err(ExtractionError::Service {
                    code: payload.error.code,
                    message: payload.error.message.unwrap_or_default(),
                    details: payload.error.details,
                }),
                Err(_) => Err(ExtractionError::UnexpectedResponse {
                    status: status.as_u16(),
                }),
            };
        }

        serde_json::from_str(body).map_err(|e| ExtractionError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl ExtractionClient for HttpExtractionClient {
    async fn extract(&self, folder_input: &str) -> Result<ExtractFilesResponse, ExtractionError> {
        let url = self
            .config
            .extract_url()
            .ok_or(ExtractionError::NotConfigured)?;

        let payload = json!({ "folderUrl": folder_input.trim() });
        tracing::debug!(%url, "POST extract request");

        let resp = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ExtractionError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ExtractionError::Transport(e.to_string()))?;

        let result = Self::interpret_response(status, &body);
        match &result {
            Err(ExtractionError::Service { code, details, .. }) => {
                tracing::warn!(?code, %status, "Extraction service reported an error");
                tracing::debug!(?details, "Error details");
            }
            Err(ExtractionError::UnexpectedResponse { status }) => {
                tracing::warn!(status, "Failure response without an error body");
            }
            _ => {}
        }
        result
    }
}
