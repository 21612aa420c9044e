//! HTTP adapters for the classification and prediction services.

mod classify_client;
pub(crate) mod dto;
mod predict_client;

pub use classify_client::ClassifyApiClient;
pub use predict_client::PredictApiClient;
