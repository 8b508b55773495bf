// Copy-link action.
//
// Copying a link flips its button label to "Copied!" for a short moment.
// Clipboard failures are swallowed: the user just doesn't see the label.

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// How long a link keeps its "Copied!" label.
pub const COPIED_LABEL_DURATION: Duration = Duration::from_millis(1500);

pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Port for whatever clipboard the host offers.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

pub struct LinkCopier<W: ClipboardWriter> {
    writer: W,
    copied_at: DashMap<String, Instant>,
}

impl<W: ClipboardWriter> LinkCopier<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            copied_at: DashMap::new(),
        }
    }

    /// Copy a link. Returns whether it made it to the clipboard.
    pub async fn copy(&self, link: &str) -> bool {
        match self.writer.write_text(link).await {
            Ok(()) => {
                self.copied_at.insert(link.to_string(), Instant::now());
                true
            }
            Err(e) => {
                tracing::debug!("Copy failed silently: {}", e);
                false
            }
        }
    }

    /// True while the link is still inside its "Copied!" window.
    pub fn is_copied(&self, link: &str) -> bool {
        let fresh = self
            .copied_at
            .get(link)
            .map(|at| at.elapsed() < COPIED_LABEL_DURATION)
            .unwrap_or(false);
        if !fresh {
            self.copied_at.remove(link);
        }
        fresh
    }

    /// Button label for a link: the default label, or "Copied!".
    pub fn label<'a>(&self, link: &str, default: &'a str) -> &'a str {
        if self.is_copied(link) {
            COPIED_LABEL
        } else {
            default
        }
    }
}
