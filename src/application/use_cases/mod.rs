//! Use case implementations.

mod classify_logs_use_case;
mod predict_price_use_case;

pub use classify_logs_use_case::ClassifyLogsUseCase;
pub use predict_price_use_case::PredictPriceUseCase;
