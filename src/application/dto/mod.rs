//! Data transfer objects for the application layer.

mod classify_dto;
mod predict_dto;

pub use classify_dto::{ClassifyOutcome, ClassifyRequest};
pub use predict_dto::PredictForm;
