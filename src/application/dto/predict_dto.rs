//! Prediction DTOs.

/// Raw prediction form text, exactly as the user entered it.
///
/// Numeric coercion only happens after the non-empty check passes, so this
/// carries strings rather than numbers.
#[derive(Debug, Clone, Default)]
pub struct PredictForm {
    /// Total area in square feet.
    pub total_sqft: String,
    /// Number of bathrooms.
    pub bath: String,
    /// Number of balconies.
    pub balcony: String,
    /// Number of bedrooms.
    pub bedroom: String,
    /// Selected location, empty while the placeholder is selected.
    pub location: String,
}

impl PredictForm {
    /// Returns true when every field holds a non-empty value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.total_sqft.trim().is_empty()
            && !self.bath.trim().is_empty()
            && !self.balcony.trim().is_empty()
            && !self.bedroom.trim().is_empty()
            && !self.location.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PredictForm {
        PredictForm {
            total_sqft: "1200".to_string(),
            bath: "2".to_string(),
            balcony: "1".to_string(),
            bedroom: "3".to_string(),
            location: "Anekal".to_string(),
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_missing_location_is_incomplete() {
        let mut form = filled();
        form.location.clear();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_whitespace_only_field_is_incomplete() {
        let mut form = filled();
        form.bath = "   ".to_string();
        assert!(!form.is_complete());
    }
}
