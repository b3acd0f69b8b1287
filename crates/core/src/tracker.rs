//! Tracker models - the grouped-by-category view of experience.

use serde::Serialize;

/// One category's worth of tracked experience, skills sorted by
/// descending total months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceTracker {
    /// Category name
    pub category: String,

    /// Qualifying skills, most experience first
    pub experiences: Vec<TrackedSkill>,
}

/// A single skill inside a tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedSkill {
    /// Skill name
    pub name: String,

    /// Total months of experience
    pub total_months: u32,

    /// Human-readable duration, e.g. "1 year 7 months"
    pub display: String,

    /// Up to 3 engagement labels
    pub sources: Vec<String>,
}
