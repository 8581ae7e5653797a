//! Error types for gradebook

use thiserror::Error;

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for all gradebook operations
#[derive(Error, Debug, Clone)]
pub enum GradebookError {
    #[error("MongoDB error: {0}")]
    MongoDB(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// MongoDB-specific error conversions (when mongodb-errors feature is enabled)
#[cfg(feature = "mongodb-errors")]
impl From<mongodb::error::Error> for GradebookError {
    fn from(err: mongodb::error::Error) -> Self {
        GradebookError::MongoDB(err.to_string())
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::ser::Error> for GradebookError {
    fn from(err: bson::ser::Error) -> Self {
        GradebookError::Serialization(format!("BSON serialization error: {}", err))
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::de::Error> for GradebookError {
    fn from(err: bson::de::Error) -> Self {
        GradebookError::Deserialization(format!("BSON deserialization error: {}", err))
    }
}
