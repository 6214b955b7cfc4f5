//! Error types for configuration and asset I/O.
//!
//! The simulation itself never fails; only loading and saving files can.

/// Result alias used by fallible configuration and asset operations.
pub type RiftResult<T> = Result<T, RiftError>;

/// Errors raised while reading or writing configuration and assets.
#[derive(thiserror::Error, Debug)]
pub enum RiftError {
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unserializable JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameters that cannot drive a consistent simulation.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A sprite that could not be loaded.
    #[error("asset error: {path}: {reason}")]
    Asset {
        /// Path of the asset that failed.
        path: String,
        /// Loader message.
        reason: String,
    },
}

impl RiftError {
    /// Builds an [`RiftError::InvalidParams`] from any message.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Builds an [`RiftError::Asset`] for `path`.
    pub fn asset(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Asset {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
