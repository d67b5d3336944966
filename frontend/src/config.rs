//! Application configuration.
//!
//! The prediction endpoint is not a global: the [`App`](crate::App) provides
//! an [`ApiConfig`] through Leptos context and everything downstream reads it
//! from there. Builds pick the default base URL from the `PREDICT_API_URL`
//! environment variable at compile time (e.g. `PREDICT_API_URL=... trunk build`).

/// Base URL used when nothing is configured at build time.
///
/// Port 5000 is where the prediction service (and `predict-stub`) listen.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path of the prediction route, relative to the base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// MIME types accepted by the drop target.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = "image/jpeg,image/png,image/webp,.jpeg,.jpg,.png,.webp";

/// Where to reach the prediction service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for an arbitrary base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the prediction route.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("PREDICT_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url() {
        let config = ApiConfig::new("http://mock.local:8080");
        assert_eq!(config.predict_url(), "http://mock.local:8080/predict");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://mock.local/api/");
        assert_eq!(config.base_url, "http://mock.local/api");
        assert_eq!(config.predict_url(), "http://mock.local/api/predict");
    }
}
