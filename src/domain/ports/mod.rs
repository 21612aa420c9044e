mod classify_port;
mod predict_port;

pub use classify_port::ClassifyPort;
pub use predict_port::PredictPort;

#[cfg(test)]
pub mod mocks {
    pub use super::classify_port::mock::MockClassifyPort;
    pub use super::predict_port::mock::MockPredictPort;
}
