//! JSON file store implementation.
//!
//! Reads and rewrites a single portfolio JSON file in place. The write is
//! a plain full rewrite with no temp-file dance; a failure mid-write can
//! leave the file truncated, which matches the tool's one-shot model.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use super::{PortfolioDocument, PortfolioStore, Result, StorageError};

/// File-backed portfolio store.
pub struct JsonPortfolioStore {
    path: PathBuf,
}

impl JsonPortfolioStore {
    /// Create a store over the portfolio file at `path`. The file is not
    /// touched until `load` or `save` is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PortfolioStore for JsonPortfolioStore {
    async fn load(&self) -> Result<PortfolioDocument> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        // The top level must be a JSON object; anything else is malformed.
        let fields: Map<String, Value> = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), fields = fields.len(), "loaded portfolio");
        Ok(PortfolioDocument::new(fields))
    }

    async fn save(&mut self, document: &PortfolioDocument) -> Result<()> {
        // serde_json pretty-prints with 2-space indentation and leaves
        // non-ASCII characters unescaped, as the template expects.
        let json = serde_json::to_string_pretty(document.fields())?;
        fs::write(&self.path, json.as_bytes()).await?;
        debug!(path = %self.path.display(), bytes = json.len(), "saved portfolio");
        Ok(())
    }
}
