//! Error types for the storage backends.

use thiserror::Error;

/// Errors raised while reading or writing a storage key.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read or write the value.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A container could not be encoded as JSON.
    #[error("failed to serialize key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}
