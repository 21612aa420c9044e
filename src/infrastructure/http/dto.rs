use serde::Deserialize;

/// Location list response structure.
#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    /// Location names, unsorted.
    #[serde(default)]
    pub message: Vec<String>,
}

/// Prediction response structure.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// Estimated price in the service's unit, absent on malformed answers.
    pub estimated_price: Option<f64>,
}

/// Structured error body used by both services.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// Error message.
    pub detail: String,
}
