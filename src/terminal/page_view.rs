//! Text rendering of the page.
//!
//! Mirrors the web page top to bottom: header, status line, file table,
//! export hint, and the "nothing parsed" notice.

use std::fmt::Write;

use crate::core::file_list::{render_file_list, FileListView, EMPTY_LIST_PLACEHOLDER};
use crate::core::page::PageSnapshot;

pub const TITLE: &str = "Google Drive File Extractor";
pub const SUBTITLE: &str = "Paste a public Google Drive folder link or folder ID to list all files, \
including quick view and direct download links.";
pub const SHARING_HINT: &str = "Make sure your folder (or the folder for your ID) is shared as \
\"Anyone with the link can view\" (or edit). Private folders will not work with this tool.";
pub const NOTHING_PARSED: &str = "No files were parsed. Check that the folder sharing is \
'Anyone with the link can view' and try again.";

const COPY_LABEL: &str = "Copy view link";

/// Picks the copy button label for a link ("Copied!" right after a copy).
pub type CopyLabel<'a> = &'a dyn Fn(&str, &'static str) -> &'static str;

pub fn render_header() -> String {
    format!("{}\n{}\n\n{}\n", TITLE, SUBTITLE, SHARING_HINT)
}

/// Render the file table alone. An empty list renders the placeholder.
pub fn render_files(page: &PageSnapshot, copy_label: CopyLabel<'_>) -> String {
    let rows = match render_file_list(&page.files) {
        FileListView::Empty => return format!("{}\n", EMPTY_LIST_PLACEHOLDER),
        FileListView::Rows(rows) => rows,
    };

    let names: Vec<String> = rows.iter().map(|r| r.display_name()).collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "  #  {:<width$}  Type", "Name", width = name_width);
    for (i, (row, name)) in rows.iter().zip(&names).enumerate() {
        let n = i + 1;
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:<16}  [view {n}] [copy {n}: {}]",
            n,
            name,
            row.category.display_label(),
            copy_label(&row.view_url, COPY_LABEL),
            width = name_width,
        );
    }
    out
}

/// Render the whole page state below the header.
pub fn render_page(page: &PageSnapshot, copy_label: CopyLabel<'_>) -> String {
    let mut out = String::new();

    if page.loading {
        let _ = writeln!(out, "Extracting...");
    }

    if !page.error.is_empty() {
        let _ = writeln!(out, "Error: {}", page.error);
    } else if let Some(folder_id) = &page.folder_id {
        let _ = writeln!(out, "Folder ID: {}", folder_id);
        let _ = writeln!(out, "Showing files for folder ID {}", folder_id);
    }

    if page.can_export() {
        out.push('\n');
        out.push_str(&render_files(page, copy_label));
        let _ = writeln!(
            out,
            "\n{} file(s). Type `export` to download as Excel (drive-files.xls).",
            page.files.len()
        );
    } else if page.folder_id.is_some() && page.error.is_empty() {
        let notice = if page.info_message.is_empty() {
            NOTHING_PARSED
        } else {
            page.info_message.as_str()
        };
        let _ = writeln!(out, "{}", notice);
    }

    out
}
