use serde::{Deserialize, Serialize};

/// MIME type Drive reports for folder objects.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// One file (or sub-folder) returned by the extraction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    /// Display name. Can be missing, or be the raw Drive ID when the
    /// service could not resolve a real file name.
    #[serde(default)]
    pub name: String,
    pub mime_type: String,
    pub view_url: String,
    pub download_url: String,
}

impl DriveFile {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// Where the listing came from. The service only lists public folders today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractSource {
    #[default]
    Public,
    #[serde(other)]
    Unknown,
}

/// Successful response body of `POST /api/extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFilesResponse {
    pub folder_id: String,
    #[serde(default)]
    pub source: ExtractSource,
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error codes the service reports. The UI shows the message only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractErrorCode {
    InvalidFolderUrl,
    FolderNotFound,
    InternalError,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Only the presence of `error` matters; every field inside it is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: ExtractErrorCode,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Failure response body: `{ "error": { code, message, details? } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseBody {
    pub error: ErrorDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_uses_camel_case() {
        let body = r#"{
            "folderId": "ABC123",
            "source": "public",
            "files": [{
                "id": "1",
                "name": "report.pdf",
                "mimeType": "application/pdf",
                "viewUrl": "https://drive.google.com/file/d/1/view",
                "downloadUrl": "https://drive.google.com/uc?id=1&export=download"
            }]
        }"#;

        let parsed: ExtractFilesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.folder_id, "ABC123");
        assert_eq!(parsed.source, ExtractSource::Public);
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].mime_type, "application/pdf");
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_missing_name_and_files_default_to_empty() {
        let parsed: ExtractFilesResponse =
            serde_json::from_str(r#"{"folderId":"X","message":"Folder is empty"}"#).unwrap();
        assert!(parsed.files.is_empty());
        assert_eq!(parsed.message.as_deref(), Some("Folder is empty"));

        let file: DriveFile = serde_json::from_str(
            r#"{"id":"1","mimeType":"image/png","viewUrl":"v","downloadUrl":"d"}"#,
        )
        .unwrap();
        assert_eq!(file.name, "");
    }

    #[test]
    fn test_error_codes() {
        let body: ErrorResponseBody = serde_json::from_str(
            r#"{"error":{"code":"FOLDER_NOT_FOUND","message":"Folder not found"}}"#,
        )
        .unwrap();
        assert_eq!(body.error.code, ExtractErrorCode::FolderNotFound);
        assert_eq!(body.error.message.as_deref(), Some("Folder not found"));
        assert!(body.error.details.is_none());

        let unknown: ErrorResponseBody = serde_json::from_str(
            r#"{"error":{"code":"RATE_LIMITED","message":"Slow down","details":{"retry":5}}}"#,
        )
        .unwrap();
        assert_eq!(unknown.error.code, ExtractErrorCode::Unknown);
        assert!(unknown.error.details.is_some());
    }

    #[test]
    fn test_error_fields_are_optional() {
        let no_code: ErrorResponseBody =
            serde_json::from_str(r#"{"error":{"message":"Folder not found"}}"#).unwrap();
        assert_eq!(no_code.error.code, ExtractErrorCode::Unknown);
        assert_eq!(no_code.error.message.as_deref(), Some("Folder not found"));

        let null_message: ErrorResponseBody =
            serde_json::from_str(r#"{"error":{"code":"FOLDER_NOT_FOUND","message":null}}"#)
                .unwrap();
        assert_eq!(null_message.error.message, None);

        let empty: ErrorResponseBody = serde_json::from_str(r#"{"error":{}}"#).unwrap();
        assert_eq!(empty.error.code, ExtractErrorCode::Unknown);
    }

    #[test]
    fn test_is_folder() {
        let mut file = DriveFile {
            id: "1".to_string(),
            name: "Photos".to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            view_url: String::new(),
            download_url: String::new(),
        };
        assert!(file.is_folder());
        file.mime_type = "image/png".to_string();
        assert!(!file.is_folder());
    }
}
