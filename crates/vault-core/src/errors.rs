//! Error types for the vault dashboard engine

use thiserror::Error;

/// Core errors surfaced by vault crates
#[derive(Debug, Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Session storage backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Session storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },

    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize stored value: {message}")]
    Serialization { message: String },
}

/// Result type alias for vault operations
pub type Result<T> = std::result::Result<T, Error>;

impl StorageError {
    /// Get a UI-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "storage_unavailable",
            Self::QuotaExceeded { .. } => "storage_quota_exceeded",
            Self::Io(_) => "storage_io",
            Self::Serialization { .. } => "storage_serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_codes() {
        let err = StorageError::QuotaExceeded { key: "k".into() };
        assert_eq!(err.error_code(), "storage_quota_exceeded");

        let err = StorageError::Unavailable {
            reason: "disabled".into(),
        };
        assert_eq!(err.error_code(), "storage_unavailable");
        assert_eq!(err.to_string(), "Session storage unavailable: disabled");
    }

    #[test]
    fn test_storage_error_converts() {
        let err: Error = StorageError::Serialization {
            message: "bad".into(),
        }
        .into();
        assert!(matches!(err, Error::Storage(_)));
    }
}
