// Excel export - serializes the current file list into an HTML table that
// spreadsheet apps open directly. It is NOT a real XLS/XLSX binary, which is
// why the file gets the legacy .xls extension.

use crate::core::extraction::DriveFile;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub const EXPORT_FILE_NAME: &str = "drive-files.xls";
pub const EXPORT_MIME_TYPE: &str = "application/vnd.ms-excel";

const HEADER_ROW: &str = "<tr><th>Name</th><th>Type</th><th>Drive link</th></tr>";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    Write(String),
}

/// A ready-to-save export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Where export documents end up (a download folder, a temp dir in tests).
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Persist the document and return where it was written.
    async fn save(&self, document: &ExportDocument) -> Result<PathBuf, ExportError>;
}

/// Escape the five HTML-reserved characters. `&` goes first so the
/// transformation stays reversible.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Coarse type column: only folders are told apart.
fn export_type(file: &DriveFile) -> &'static str {
    if file.is_folder() {
        "Folder"
    } else {
        "File"
    }
}

/// Build the export for a file list, or `None` if there is nothing to export.
pub fn build_export(files: &[DriveFile]) -> Option<ExportDocument> {
    if files.is_empty() {
        return None;
    }

    let rows: String = files
        .iter()
        .map(|file| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&file.name),
                export_type(file),
                escape_html(&file.view_url)
            )
        })
        .collect();

    Some(ExportDocument {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        contents: format!("<table>{}{}</table>", HEADER_ROW, rows),
    })
}
