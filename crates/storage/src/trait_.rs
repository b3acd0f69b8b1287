//! Store trait abstraction.

use async_trait::async_trait;

use crate::document::PortfolioDocument;

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while loading or saving the portfolio document.
/// All of them are fatal; there is no retry or recovery path.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Portfolio file does not exist
    #[error("Portfolio file not found: {0}")]
    NotFound(String),
}

/// Store abstraction for the portfolio document.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Load the full portfolio document.
    async fn load(&self) -> Result<PortfolioDocument>;

    /// Write the full portfolio document back.
    async fn save(&mut self, document: &PortfolioDocument) -> Result<()>;
}
