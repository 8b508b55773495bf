// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "extraction/mod.rs"]
pub mod extraction;

#[path = "export/mod.rs"]
pub mod export;

#[path = "clipboard/mod.rs"]
pub mod clipboard;
