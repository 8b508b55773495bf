pub mod excel_export;

pub use excel_export::{build_export, ExportDocument, ExportError, ExportSink};
