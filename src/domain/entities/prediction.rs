//! Price prediction request and result entities.

use serde::{Deserialize, Serialize};

/// JSON payload for a price prediction, built fresh per submission.
///
/// The numeric fields are coerced from raw form text. Non-numeric input
/// coerces to NaN, which serializes as JSON `null` — the service is left to
/// reject it; the client does no numeric validation beyond "non-empty".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Total area in square feet.
    pub total_sqft: f64,
    /// Number of bathrooms.
    pub bath: f64,
    /// Number of balconies.
    pub balcony: f64,
    /// Number of bedrooms.
    pub bedroom: f64,
    /// Selected location name.
    pub location: String,
}

impl PredictionRequest {
    /// Builds a payload from raw form text, coercing the numeric fields.
    #[must_use]
    pub fn from_form(
        total_sqft: &str,
        bath: &str,
        balcony: &str,
        bedroom: &str,
        location: impl Into<String>,
    ) -> Self {
        Self {
            total_sqft: coerce_number(total_sqft),
            bath: coerce_number(bath),
            balcony: coerce_number(balcony),
            bedroom: coerce_number(bedroom),
            location: location.into(),
        }
    }
}

/// A raw price figure returned by the prediction service.
///
/// The unit is the service's own (lakhs); conversion to a display currency
/// happens in the price formatter, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate(pub f64);

fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
