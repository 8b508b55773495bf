pub mod osc52_clipboard;

pub use osc52_clipboard::Osc52Clipboard;
