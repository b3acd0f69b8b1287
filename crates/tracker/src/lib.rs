//! Experience derivation for folio.
//!
//! Turns the static experience table into the two views the portfolio
//! template renders: per-category trackers and a flattened skills list,
//! and writes them into the portfolio document.

#![warn(missing_docs)]

pub mod generator;
pub mod skills;
pub mod updater;

pub use generator::generate_trackers;
pub use skills::convert_to_skills;
pub use updater::{PortfolioUpdater, UpdateReport};
