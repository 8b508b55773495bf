use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::export::{ExportDocument, ExportError, ExportSink};

/// Writes export documents into a directory, the terminal stand-in for a
/// browser download. An existing file with the same name is replaced.
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportSink for FileExportSink {
    async fn save(&self, document: &ExportDocument) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ExportError::Write(e.to_string()))?;

        let path = self.dir.join(document.file_name);
        tokio::fs::write(&path, document.contents.as_bytes())
            .await
            .map_err(|e| ExportError::Write(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(mime_type = document.mime_type, "Wrote export document");
        Ok(path)
    }
}
