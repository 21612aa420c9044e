//! UI screens.

mod app;
mod classify_screen;
mod predict_screen;

pub use app::App;
pub use classify_screen::{ClassifyAction, ClassifyScreen, ClassifyState};
pub use predict_screen::{PredictAction, PredictFocus, PredictScreen};
