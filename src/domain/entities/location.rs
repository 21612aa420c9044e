//! Location list entity.

/// The selectable locations offered by the prediction service.
///
/// Fetched once at startup, sorted case-insensitively, then immutable until
/// a reload. An empty list is a valid state the UI must render as
/// "unavailable" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationList {
    names: Vec<String>,
}

impl LocationList {
    /// Builds a sorted list from the service response.
    #[must_use]
    pub fn new(mut names: Vec<String>) -> Self {
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        Self { names }
    }

    /// Returns true when the service offered no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sorted location names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_case_insensitively() {
        let list = LocationList::new(vec![
            "banashankari".to_string(),
            "Anekal".to_string(),
            "Yelahanka".to_string(),
            "BTM Layout".to_string(),
        ]);
        assert_eq!(
            list.names(),
            ["Anekal", "banashankari", "BTM Layout", "Yelahanka"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(LocationList::default().is_empty());
        assert!(LocationList::new(Vec::new()).is_empty());
    }
}
