//! Price prediction API HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::{ErrorDetail, LocationsResponse, PredictResponse};
use crate::domain::entities::{PredictionRequest, PriceEstimate};
use crate::domain::errors::ApiError;
use crate::domain::ports::PredictPort;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Prediction API client.
pub struct PredictApiClient {
    client: Client,
    base_url: String,
}

impl PredictApiClient {
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

    fn map_transport_error(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to prediction service")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn decode_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ErrorDetail>().await {
            Ok(err) => ApiError::server(err.detail),
            Err(_) => ApiError::server(format!("server returned {status}")),
        }
    }
}

#[async_trait]
impl PredictPort for PredictApiClient {
    async fn fetch_locations(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/get_location_names", self.base_url);

        debug!("Fetching location names");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach prediction service");
            Self::map_transport_error(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Location fetch answered with an error");
            return Err(Self::decode_error(response).await);
        }

        let body: LocationsResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse location response");
            ApiError::server(format!("failed to parse response: {e}"))
        })?;

        debug!(count = body.message.len(), "Locations received");
        Ok(body.message)
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PriceEstimate, ApiError> {
        let url = format!("{}/predict_home_price", self.base_url);

        debug!(location = %request.location, "Submitting prediction");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach prediction service");
                Self::map_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Prediction answered with an error");
            return Err(Self::decode_error(response).await);
        }

        let body: PredictResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse prediction response");
            ApiError::server(format!("failed to parse response: {e}"))
        })?;

        body.estimated_price.map(PriceEstimate).ok_or(ApiError::NoPrice)
    }
}
