// OSC 52 clipboard.
//
// Most terminal emulators (and tmux with `set-clipboard on`) accept
// `ESC ] 52 ; c ; <base64> BEL` and put the payload on the system clipboard.
// It also works over SSH, where no local clipboard API is reachable.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use std::sync::Mutex;

use crate::core::links::{ClipboardError, ClipboardWriter};

pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

#[async_trait]
impl<W: Write + Send> ClipboardWriter for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        out.write_all(Self::sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}
