// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "extraction/mod.rs"]
pub mod extraction;

#[path = "file_list/mod.rs"]
pub mod file_list;

#[path = "export/mod.rs"]
pub mod export;

#[path = "links/mod.rs"]
pub mod links;

#[path = "page/mod.rs"]
pub mod page;
