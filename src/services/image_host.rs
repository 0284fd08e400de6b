//! Client for the external image host.
//!
//! The host accepts a base64-encoded image and answers with either a durable
//! asset URL or an error string. Nothing is retried here; a failed upload
//! surfaces to the caller as-is.

use crate::config::ImageHostConfig;
use crate::error::{AppError, Result};
use crate::metrics;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct UploadRequest<'a> {
    image: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default, rename = "assetSecureUrl", alias = "asset_secure_url")]
    pub(crate) asset_secure_url: Option<String>,
}

/// HTTP client for the image host upload endpoint.
#[derive(Clone)]
pub struct ImageHostClient {
    http_client: Client,
    upload_url: String,
}

impl ImageHostClient {
    pub fn new(upload_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            upload_url: upload_url.into(),
        })
    }

    /// Create a client from configuration
    pub fn from_config(cfg: &ImageHostConfig) -> Result<Self> {
        Self::new(cfg.upload_url.clone(), Duration::from_secs(cfg.timeout_secs))
    }

    /// Upload an encoded image and return the durable asset URL.
    ///
    /// An explicit error string from the host, a non-success status, or a
    /// response without an asset URL all map to `AppError::UploadError`.
    pub async fn upload_image(&self, encoded_image: &str) -> Result<String> {
        let timer = metrics::UPLOAD_DURATION_SECONDS.start_timer();

        let response = self
            .http_client
            .post(&self.upload_url)
            .json(&UploadRequest {
                image: encoded_image,
            })
            .send()
            .await
            .map_err(|e| AppError::UploadError(format!("upload request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            timer.observe_duration();
            return Err(AppError::UploadError(format!(
                "upload endpoint returned {status}"
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::UploadError(format!("invalid upload response: {e}")))?;

        timer.observe_duration();

        if let Some(error) = body.error {
            return Err(AppError::UploadError(error));
        }

        match body.asset_secure_url {
            Some(url) => {
                debug!(asset_url = %url, "image host accepted upload");
                Ok(url)
            }
            None => Err(AppError::UploadError(
                "upload response contained no asset URL".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"assetSecureUrl":"https://img.example/a.png"}"#).unwrap();
        assert_eq!(
            body.asset_secure_url.as_deref(),
            Some("https://img.example/a.png")
        );
        assert!(body.error.is_none());
    }

    #[test]
    fn parses_snake_case_alias() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"asset_secure_url":"https://img.example/b.png"}"#).unwrap();
        assert_eq!(
            body.asset_secure_url.as_deref(),
            Some("https://img.example/b.png")
        );
    }

    #[test]
    fn parses_error_response() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"error":"unsupported format"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("unsupported format"));
        assert!(body.asset_secure_url.is_none());
    }

    #[test]
    fn tolerates_empty_response_body() {
        let body: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
        assert!(body.asset_secure_url.is_none());
    }
}
