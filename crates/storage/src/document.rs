//! The portfolio document - an ordered map of top-level JSON fields.
//!
//! The document carries arbitrary portfolio fields owned by other tooling;
//! callers only ever add or overwrite individual keys, and everything else
//! passes through a load/save cycle unchanged. Field order is insertion
//! order (`serde_json` with `preserve_order`), so a rewrite keeps the
//! file's existing key layout.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::trait_::Result;

/// A portfolio document as read from disk.
#[derive(Debug, Clone, Default)]
pub struct PortfolioDocument {
    fields: Map<String, Value>,
}

impl PortfolioDocument {
    /// Wrap an already-parsed field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set a top-level field, replacing any existing value under that key.
    pub fn set_field<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.fields.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Get a top-level field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
