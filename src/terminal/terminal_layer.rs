// Terminal layer - the interactive page and its commands.

#[path = "commands.rs"]
pub mod commands;

#[path = "page_view.rs"]
pub mod page_view;

#[path = "session.rs"]
pub mod session;

pub use session::Session;
