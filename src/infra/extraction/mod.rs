// Extraction infra layer.
// - `api_config.rs` resolves where the backend lives.
// - `http_extraction_client.rs` talks to it over HTTP.

pub mod api_config;
pub mod http_extraction_client;

pub use api_config::ApiConfig;
pub use http_extraction_client::HttpExtractionClient;
