//! Price prediction use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::PredictForm;
use crate::application::services::format_estimate;
use crate::domain::entities::{LocationList, PredictionRequest};
use crate::domain::errors::ApiError;
use crate::domain::ports::PredictPort;

/// Handles the location-load and predict workflows.
#[derive(Clone)]
pub struct PredictPriceUseCase {
    predict_port: Arc<dyn PredictPort>,
}

impl PredictPriceUseCase {
    /// Creates new prediction use case.
    #[must_use]
    pub fn new(predict_port: Arc<dyn PredictPort>) -> Self {
        Self { predict_port }
    }

    /// Fetches and sorts the selectable locations.
    ///
    /// # Errors
    /// Returns error when the service is unreachable or answers non-2xx.
    pub async fn load_locations(&self) -> Result<LocationList, ApiError> {
        debug!("Fetching location names");

        let names = self.predict_port.fetch_locations().await.map_err(|e| {
            warn!(error = %e, "Failed to load locations");
            e
        })?;

        info!(count = names.len(), "Locations loaded");
        Ok(LocationList::new(names))
    }

    /// Validates the form, submits it, and formats the resulting estimate.
    ///
    /// # Errors
    /// Returns a validation error before any network call when a field is
    /// empty; otherwise propagates service failures.
    pub async fn execute(&self, form: &PredictForm) -> Result<String, ApiError> {
        if !form.is_complete() {
            debug!("Prediction form incomplete, skipping request");
            return Err(ApiError::validation("Please fill out all fields."));
        }

        let request = PredictionRequest::from_form(
            &form.total_sqft,
            &form.bath,
            &form.balcony,
            &form.bedroom,
            form.location.clone(),
        );

        debug!(location = %request.location, "Submitting prediction request");

        let estimate = self.predict_port.predict(&request).await.map_err(|e| {
            warn!(error = %e, "Prediction request failed");
            e
        })?;

        info!(raw = estimate.0, "Prediction received");
        Ok(format_estimate(estimate.0))
    }
}
