//! File list rendering rules.
//!
//! Turns the raw records returned by the extraction service into display
//! rows: a human-readable category per MIME type and a warning flag for
//! names that look like bare Drive IDs.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::extraction::{DriveFile, FOLDER_MIME_TYPE};

/// Placeholder shown instead of a table when there is nothing to list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No files found.";

/// Note appended to names that look like opaque Drive IDs.
pub const NAME_NOT_AVAILABLE_NOTE: &str = "(name not available)";

/// Names longer than this made only of ID characters are flagged.
const ID_LIKE_MIN_LEN: usize = 20;

// Literal pattern, so compiling it cannot fail.
static ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid ID pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Folder,
    File,
    Video,
    Audio,
    Image,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
}

impl FileCategory {
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Folder => "Folder",
            FileCategory::File => "File",
            FileCategory::Video => "Video",
            FileCategory::Audio => "Audio",
            FileCategory::Image => "Image",
            FileCategory::Pdf => "PDF",
            FileCategory::Document => "Document",
            FileCategory::Spreadsheet => "Spreadsheet",
            FileCategory::Presentation => "Presentation",
            FileCategory::Archive => "Archive",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileCategory::Folder => "📁",
            FileCategory::File => "📄",
            FileCategory::Video => "🎬",
            FileCategory::Audio => "🎵",
            FileCategory::Image => "🖼️",
            FileCategory::Pdf => "📕",
            FileCategory::Document => "📝",
            FileCategory::Spreadsheet => "📊",
            FileCategory::Presentation => "📽️",
            FileCategory::Archive => "📦",
        }
    }

    /// Icon plus label, e.g. "📕 PDF".
    pub fn display_label(self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

/// A single test against a MIME type string.
#[derive(Debug, Clone, Copy)]
enum MimeRule {
    Exact(&'static str),
    Prefix(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl MimeRule {
    fn matches(self, mime_type: &str) -> bool {
        match self {
            MimeRule::Exact(expected) => mime_type == expected,
            MimeRule::Prefix(prefix) => mime_type.starts_with(prefix),
            MimeRule::ContainsAny(needles) => needles.iter().any(|n| mime_type.contains(n)),
        }
    }
}

// Evaluated top to bottom, first match wins. Order matters: "application/
// vnd.google-apps.folder" must never reach the substring rules, and
// octet-stream must stay a plain File.
const MIME_RULES: &[(MimeRule, FileCategory)] = &[
    (MimeRule::Exact(FOLDER_MIME_TYPE), FileCategory::Folder),
    (MimeRule::Exact("application/octet-stream"), FileCategory::File),
    (MimeRule::Prefix("video/"), FileCategory::Video),
    (MimeRule::Prefix("audio/"), FileCategory::Audio),
    (MimeRule::Prefix("image/"), FileCategory::Image),
    (MimeRule::Exact("application/pdf"), FileCategory::Pdf),
    (
        MimeRule::ContainsAny(&["document", "word"]),
        FileCategory::Document,
    ),
    (
        MimeRule::ContainsAny(&["spreadsheet", "excel"]),
        FileCategory::Spreadsheet,
    ),
    (
        MimeRule::ContainsAny(&["presentation", "powerpoint"]),
        FileCategory::Presentation,
    ),
    (
        MimeRule::ContainsAny(&["zip", "rar", "7z", "tar"]),
        FileCategory::Archive,
    ),
];

/// Category for a MIME type. Falls back to [`FileCategory::File`].
pub fn categorize(mime_type: &str) -> FileCategory {
    MIME_RULES
        .iter()
        .find(|(rule, _)| rule.matches(mime_type))
        .map(|(_, category)| *category)
        .unwrap_or(FileCategory::File)
}

/// Heuristic: no spaces or dots, only `[a-zA-Z0-9_-]`, and longer than 20
/// characters. Real file names rarely look like that; Drive IDs always do.
pub fn is_likely_just_id(name: &str) -> bool {
    name.len() > ID_LIKE_MIN_LEN && ID_CHARS.is_match(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub name_is_id: bool,
    pub category: FileCategory,
    pub view_url: String,
}

impl FileRow {
    fn from_file(file: &DriveFile) -> Self {
        Self {
            name: file.name.clone(),
            name_is_id: is_likely_just_id(&file.name),
            category: categorize(&file.mime_type),
            view_url: file.view_url.clone(),
        }
    }

    /// Name with the "(name not available)" note when it looks like an ID.
    pub fn display_name(&self) -> String {
        if self.name_is_id {
            format!("{} {}", self.name, NAME_NOT_AVAILABLE_NOTE)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListView {
    Empty,
    Rows(Vec<FileRow>),
}

/// Render a file list. Input order is preserved.
pub fn render_file_list(files: &[DriveFile]) -> FileListView {
    if files.is_empty() {
        return FileListView::Empty;
    }
    FileListView::Rows(files.iter().map(FileRow::from_file).collect())
}
