//! Cache-specific error types

use gradebook_common::GradebookError;
use thiserror::Error;

/// Cache-specific error types
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<CacheError> for GradebookError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Backend(s) => GradebookError::Cache(s),
            CacheError::Connection(s) => GradebookError::Connection(s),
            CacheError::Decode(s) => GradebookError::Decode(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_backend() {
        let err = CacheError::Backend("SET failed".to_string());
        assert_eq!(err.to_string(), "Backend error: SET failed");
    }

    #[test]
    fn test_error_display_decode() {
        let err = CacheError::Decode("not an integer".to_string());
        assert_eq!(err.to_string(), "Decode error: not an integer");
    }

    #[test]
    fn test_lowering_into_common_error() {
        let err: GradebookError = CacheError::Backend("boom".to_string()).into();
        assert!(matches!(err, GradebookError::Cache(_)));

        let err: GradebookError = CacheError::Connection("refused".to_string()).into();
        assert!(matches!(err, GradebookError::Connection(_)));

        let err: GradebookError = CacheError::Decode("bad utf-8".to_string()).into();
        assert!(matches!(err, GradebookError::Decode(_)));
    }
}
