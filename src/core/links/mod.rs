pub mod link_copy;

pub use link_copy::{ClipboardError, ClipboardWriter, LinkCopier};
