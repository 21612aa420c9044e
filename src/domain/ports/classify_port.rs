//! Classification service port definition.

use async_trait::async_trait;

use crate::domain::errors::ApiError;

/// Port for the log classification service.
#[async_trait]
pub trait ClassifyPort: Send + Sync {
    /// Uploads one CSV file and returns the classified CSV body verbatim.
    ///
    /// The returned bytes are the server response unmodified; decoding and
    /// preview parsing are the caller's concern.
    async fn classify(&self, file_name: &str, contents: Vec<u8>) -> Result<Vec<u8>, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock classification port for testing.
    pub struct MockClassifyPort {
        response: Mutex<Result<Vec<u8>, ApiError>>,
        calls: AtomicUsize,
    }

    impl MockClassifyPort {
        /// Creates a mock that answers every upload with `response`.
        pub fn new(response: Result<Vec<u8>, ApiError>) -> Self {
            Self {
                response: Mutex::new(response),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of uploads received.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClassifyPort for MockClassifyPort {
        async fn classify(
            &self,
            _file_name: &str,
            _contents: Vec<u8>,
        ) -> Result<Vec<u8>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.lock().unwrap().clone()
        }
    }
}
