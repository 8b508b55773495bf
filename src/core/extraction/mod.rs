pub mod extraction_client;
pub mod extraction_models;

pub use extraction_client::{ExtractionClient, ExtractionError};
pub use extraction_models::{DriveFile, ErrorResponseBody, ExtractFilesResponse, FOLDER_MIME_TYPE};
