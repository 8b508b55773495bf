pub mod page_controller;

pub use page_controller::{ExportOutcome, PageController, PageSnapshot, SubmitOutcome};
