//! Prediction service port definition.

use async_trait::async_trait;

use crate::domain::entities::{PredictionRequest, PriceEstimate};
use crate::domain::errors::ApiError;

/// Port for the home price prediction service.
#[async_trait]
pub trait PredictPort: Send + Sync {
    /// Fetches the raw location names offered by the service.
    async fn fetch_locations(&self) -> Result<Vec<String>, ApiError>;

    /// Submits one prediction payload and returns the raw estimate.
    ///
    /// A 2xx response without a price figure maps to [`ApiError::NoPrice`].
    async fn predict(&self, request: &PredictionRequest) -> Result<PriceEstimate, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock prediction port for testing.
    pub struct MockPredictPort {
        locations: Result<Vec<String>, ApiError>,
        estimate: Result<PriceEstimate, ApiError>,
        predict_calls: AtomicUsize,
        last_request: Mutex<Option<PredictionRequest>>,
    }

    impl MockPredictPort {
        /// Creates a mock with fixed answers for both operations.
        pub fn new(
            locations: Result<Vec<String>, ApiError>,
            estimate: Result<PriceEstimate, ApiError>,
        ) -> Self {
            Self {
                locations,
                estimate,
                predict_calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        /// Number of prediction submissions received.
        pub fn predict_call_count(&self) -> usize {
            self.predict_calls.load(Ordering::SeqCst)
        }

        /// The most recent payload, if any submission happened.
        pub fn last_request(&self) -> Option<PredictionRequest> {
            self.last_request.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictPort for MockPredictPort {
        async fn fetch_locations(&self) -> Result<Vec<String>, ApiError> {
            self.locations.clone()
        }

        async fn predict(&self, request: &PredictionRequest) -> Result<PriceEstimate, ApiError> {
            self.predict_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.estimate.clone()
        }
    }
}
