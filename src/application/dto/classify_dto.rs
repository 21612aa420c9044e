//! Classification DTOs.

use std::path::PathBuf;

use crate::domain::entities::{CsvTable, SelectedFile};

/// Classification request data.
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    /// The file chosen for upload.
    pub file: SelectedFile,
    /// Where the classified CSV artifact is written.
    pub output_path: PathBuf,
}

impl ClassifyRequest {
    /// Creates new classification request.
    #[must_use]
    pub fn new(file: SelectedFile, output_path: impl Into<PathBuf>) -> Self {
        Self {
            file,
            output_path: output_path.into(),
        }
    }
}

/// Result of a successful classification round trip.
#[derive(Debug, Clone)]
pub struct ClassifyOutcome {
    /// Path of the saved artifact, byte-identical to the server body.
    pub saved_path: PathBuf,
    /// Bounded preview table (header plus capped body rows).
    pub preview: CsvTable,
    /// Total data rows in the full response, before the preview cap.
    pub total_data_rows: usize,
}
