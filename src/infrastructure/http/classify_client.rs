//! Log classification API HTTP client.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::ErrorDetail;
use crate::domain::errors::ApiError;
use crate::domain::ports::ClassifyPort;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Classification API client.
pub struct ClassifyApiClient {
    client: Client,
    base_url: String,
}

impl ClassifyApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn decode_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        // structured detail first, raw body text as fallback
        match response.text().await {
            Ok(body) => match serde_json::from_str::<ErrorDetail>(&body) {
                Ok(err) => ApiError::server(err.detail),
                Err(_) if !body.is_empty() => ApiError::server(body),
                Err(_) => ApiError::server(format!("server returned {status}")),
            },
            Err(_) => ApiError::server(format!("server returned {status}")),
        }
    }
}

#[async_trait]
impl ClassifyPort for ClassifyApiClient {
    async fn classify(&self, file_name: &str, contents: Vec<u8>) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/classify/", self.base_url);

        debug!(file = %file_name, bytes = contents.len(), "Uploading file for classification");

        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach classification service");
                if e.is_timeout() {
                    ApiError::network("request timed out")
                } else if e.is_connect() {
                    ApiError::network("failed to connect to classification service")
                } else {
                    ApiError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Classification service answered with an error");
            return Err(Self::decode_error(response).await);
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read classification response body");
            ApiError::network(format!("failed to read response: {e}"))
        })?;

        debug!(bytes = body.len(), "Classification response received");
        Ok(body.to_vec())
    }
}
