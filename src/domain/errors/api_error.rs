//! Client-side API error types.

use thiserror::Error;

/// Error variants for the classify and predict workflows.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("{message}")]
    Server { message: String },

    #[error("received empty CSV from server")]
    EmptyCsv,

    #[error("no price returned from server")]
    NoPrice,

    #[error("file error: {message}")]
    Io { message: String },
}

impl ApiError {
    /// Creates a local validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a transport-level error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a server-reported error from a decoded or raw body.
    #[must_use]
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Creates a local file I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Returns whether the error was raised before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Io { .. })
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ApiError::validation("Please fill out all fields.");
        assert_eq!(err.to_string(), "Please fill out all fields.");
        assert!(err.is_local());
    }

    #[test]
    fn test_server_detail_is_verbatim() {
        let err = ApiError::server("bad file");
        assert_eq!(err.to_string(), "bad file");
        assert!(!err.is_local());
    }
}
