use thiserror::Error;

/// Errors that can arise in the game core and its storage layer.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around serde_json encode/decode errors (session snapshots).
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper around IO errors (directory creation, seed files, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a room definition file does not parse.
    #[error("invalid room definition {path}: {source}")]
    Seed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
