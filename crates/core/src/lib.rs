//! Folio core data models.
//!
//! This crate defines the static experience table and the derived view
//! models that the portfolio template consumes.

#![warn(missing_docs)]

// Static input table
mod experience;

// Derived views
mod tracker;
mod skill;

// Formatting
mod duration;

// Re-exports
pub use experience::{experience_table, ExperienceCategory, SkillExperience};
pub use tracker::{ExperienceTracker, TrackedSkill};
pub use skill::SkillDisplay;
pub use duration::format_duration;
