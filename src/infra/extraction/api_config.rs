/// Environment variable holding the backend base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Where the extraction backend lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Normalize a raw base URL: trailing slashes dropped, blank means unset.
    pub fn new(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty());
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(API_BASE_URL_VAR).ok().as_deref())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Full URL of the extraction endpoint, if configured.
    pub fn extract_url(&self) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{}/api/extract", base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = ApiConfig::new(Some("https://api.example.com///"));
        assert_eq!(config.base_url(), Some("https://api.example.com"));
        assert_eq!(
            config.extract_url().as_deref(),
            Some("https://api.example.com/api/extract")
        );
    }

    #[test]
    fn test_blank_base_is_unset() {
        assert_eq!(ApiConfig::new(None).base_url(), None);
        assert_eq!(ApiConfig::new(Some("")).base_url(), None);
        assert_eq!(ApiConfig::new(Some(" / ")).extract_url(), None);
    }
}
