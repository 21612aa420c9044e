//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CsvTable, LocationList, PredictionRequest, SelectedFile};
pub use errors::ApiError;
pub use ports::{ClassifyPort, PredictPort};
