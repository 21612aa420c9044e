//! Log classification use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{ClassifyOutcome, ClassifyRequest};
use crate::application::services::parse_csv;
use crate::domain::entities::CsvTable;
use crate::domain::errors::ApiError;
use crate::domain::ports::ClassifyPort;

/// Maximum data rows kept for the preview table.
pub const PREVIEW_ROWS: usize = 200;

/// Handles the upload-classify-preview workflow.
#[derive(Clone)]
pub struct ClassifyLogsUseCase {
    classify_port: Arc<dyn ClassifyPort>,
}

impl ClassifyLogsUseCase {
    /// Creates new classification use case.
    #[must_use]
    pub fn new(classify_port: Arc<dyn ClassifyPort>) -> Self {
        Self { classify_port }
    }

    /// Uploads the selected file, saves the returned CSV artifact, and
    /// builds a bounded preview.
    ///
    /// The artifact is written before the preview parse, so an empty-CSV
    /// failure still leaves the file on disk.
    ///
    /// # Errors
    /// Returns error on file I/O failure, any service failure, or when the
    /// response parses to zero CSV rows.
    pub async fn execute(&self, request: ClassifyRequest) -> Result<ClassifyOutcome, ApiError> {
        debug!(file = %request.file.name(), "Reading file for classification");

        let contents = tokio::fs::read(request.file.path()).await.map_err(|e| {
            warn!(error = %e, path = %request.file.path().display(), "Failed to read selected file");
            ApiError::io(format!("could not read {}: {e}", request.file.name()))
        })?;

        let body = self
            .classify_port
            .classify(request.file.name(), contents)
            .await
            .map_err(|e| {
                warn!(error = %e, "Classification request failed");
                e
            })?;

        tokio::fs::write(&request.output_path, &body).await.map_err(|e| {
            warn!(error = %e, path = %request.output_path.display(), "Failed to save classified CSV");
            ApiError::io(format!(
                "could not save {}: {e}",
                request.output_path.display()
            ))
        })?;

        let text = String::from_utf8_lossy(&body);
        let table = CsvTable::from_rows(parse_csv(&text));
        if table.is_empty() {
            warn!("Server returned a CSV that parsed to zero rows");
            return Err(ApiError::EmptyCsv);
        }

        let total_data_rows = table.body().len();
        info!(
            rows = total_data_rows,
            path = %request.output_path.display(),
            "Classification complete"
        );

        Ok(ClassifyOutcome {
            saved_path: request.output_path,
            preview: table.preview(PREVIEW_ROWS),
            total_data_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SelectedFile;
    use crate::domain::ports::mocks::MockClassifyPort;
    use std::io::Write;

    fn make_request(dir: &tempfile::TempDir) -> ClassifyRequest {
        let input = dir.path().join("input.csv");
        let mut f = std::fs::File::create(&input).unwrap();
        writeln!(f, "ts,msg").unwrap();
        writeln!(f, "1,boot").unwrap();
        let file = SelectedFile::new(&input, std::fs::metadata(&input).unwrap().len());
        ClassifyRequest::new(file, dir.path().join("classified_logs.csv"))
    }

    #[tokio::test]
    async fn test_successful_classification() {
        let dir = tempfile::tempdir().unwrap();
        let body = b"ts,msg,label\n1,boot,startup\n".to_vec();
        let port = Arc::new(MockClassifyPort::new(Ok(body.clone())));

        let use_case = ClassifyLogsUseCase::new(port.clone());
        let outcome = use_case.execute(make_request(&dir)).await.unwrap();

        assert_eq!(port.call_count(), 1);
        assert_eq!(outcome.total_data_rows, 1);
        assert_eq!(outcome.preview.header().unwrap(), ["ts", "msg", "label"]);

        // artifact is byte-identical to the response body
        let saved = std::fs::read(&outcome.saved_path).unwrap();
        assert_eq!(saved, body);
    }

    #[tokio::test]
    async fn test_preview_capped_at_200_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = String::from("ts,label\n");
        for i in 0..500 {
            body.push_str(&format!("{i},ok\n"));
        }
        let port = Arc::new(MockClassifyPort::new(Ok(body.into_bytes())));

        let outcome = ClassifyLogsUseCase::new(port)
            .execute(make_request(&dir))
            .await
            .unwrap();

        assert_eq!(outcome.total_data_rows, 500);
        assert_eq!(outcome.preview.body().len(), 200);
    }

    #[tokio::test]
    async fn test_empty_csv_is_error_but_artifact_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let port = Arc::new(MockClassifyPort::new(Ok(Vec::new())));
        let request = make_request(&dir);
        let output = request.output_path.clone();

        let err = ClassifyLogsUseCase::new(port)
            .execute(request)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::EmptyCsv));
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_server_detail_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let port = Arc::new(MockClassifyPort::new(Err(ApiError::server("bad file"))));

        let err = ClassifyLogsUseCase::new(port)
            .execute(make_request(&dir))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "bad file");
    }

    #[tokio::test]
    async fn test_unreadable_file_never_calls_service() {
        let dir = tempfile::tempdir().unwrap();
        let missing = SelectedFile::new(dir.path().join("nope.csv"), 0);
        let request = ClassifyRequest::new(missing, dir.path().join("out.csv"));
        let port = Arc::new(MockClassifyPort::new(Ok(Vec::new())));

        let err = ClassifyLogsUseCase::new(port.clone())
            .execute(request)
            .await
            .unwrap_err();

        assert!(err.is_local());
        assert_eq!(port.call_count(), 0);
    }
}
