//! Storage abstraction and implementations for folio.
//!
//! This crate provides a trait-based store interface over the portfolio
//! document with a JSON-file reference implementation.

#![warn(missing_docs)]

pub mod document;
pub mod json_store;
pub mod trait_;

pub use document::PortfolioDocument;
pub use json_store::JsonPortfolioStore;
pub use trait_::{PortfolioStore, Result, StorageError};
