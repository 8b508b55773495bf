// Page controller - owns the form state and drives one extraction at a time.
//
// State machine: idle -> submitting -> (success | failure) -> idle.
// The loading flag is the only guard; there is no request queue.
//
// NO terminal or HTTP dependencies here.

use crate::core::export::{build_export, ExportError, ExportSink};
use crate::core::extraction::{DriveFile, ExtractionClient};
use std::path::PathBuf;
use tokio::sync::RwLock;

pub const BLANK_INPUT_ERROR: &str = "Please enter a Google Drive folder link.";
pub const FALLBACK_ERROR: &str = "Failed to extract folder.";

/// Everything the page shows. Cloned out for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub loading: bool,
    pub error: String,
    pub files: Vec<DriveFile>,
    pub folder_id: Option<String>,
    pub info_message: String,
}

impl PageSnapshot {
    /// Export is only offered once there is something to export.
    pub fn can_export(&self) -> bool {
        !self.files.is_empty()
    }

    fn clear_results(&mut self) {
        self.files.clear();
        self.folder_id = None;
        self.info_message.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing happened.
    Ignored,
    /// Blank input; no request was sent.
    Rejected,
    Extracted { file_count: usize },
    /// The error is on the page.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No results yet.
    Disabled,
    Saved(PathBuf),
}

pub struct PageController<C: ExtractionClient, S: ExportSink> {
    client: C,
    export_sink: S,
    state: RwLock<PageSnapshot>,
}

impl<C: ExtractionClient, S: ExportSink> PageController<C, S> {
    pub fn new(client: C, export_sink: S) -> Self {
        Self {
            client,
            export_sink,
            state: RwLock::new(PageSnapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        self.state.read().await.clone()
    }

    /// Submit the folder field.
    ///
    /// The busy check and the switch into `loading` happen under one write
    /// lock, so concurrent callers can never both reach the client. The lock
    /// is released before the request is awaited.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim().to_string();
        {
            let mut state = self.state.write().await;
            if state.loading {
                tracing::debug!("Submission ignored, extraction already in progress");
                return SubmitOutcome::Ignored;
            }

            if trimmed.is_empty() {
                state.error = BLANK_INPUT_ERROR.to_string();
                state.clear_results();
                return SubmitOutcome::Rejected;
            }

            state.loading = true;
            state.error.clear();
            state.clear_results();
        }

        tracing::info!(folder = %trimmed, "Extracting folder");
        let result = self.client.extract(&trimmed).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(response) => {
                let file_count = response.files.len();
                tracing::info!(
                    folder_id = %response.folder_id,
                    source = ?response.source,
                    file_count,
                    "Extraction finished"
                );
                state.files = response.files;
                state.folder_id = Some(response.folder_id);
                state.info_message = response.message.unwrap_or_default();
                SubmitOutcome::Extracted { file_count }
            }
            Err(e) => {
                tracing::warn!(code = ?e.code(), "Extraction failed: {}", e);
                let message = e.to_string();
                state.error = if message.trim().is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                state.clear_results();
                SubmitOutcome::Failed
            }
        }
    }

    /// Export the current result set. Never touches the network.
    pub async fn export(&self) -> Result<ExportOutcome, ExportError> {
        let document = {
            let state = self.state.read().await;
            match build_export(&state.files) {
                Some(document) => document,
                None => return Ok(ExportOutcome::Disabled),
            }
        };

        let path = self.export_sink.save(&document).await?;
        tracing::info!(path = %path.display(), "Exported file list");
        Ok(ExportOutcome::Saved(path))
    }
}
