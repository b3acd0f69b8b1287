//! Tracker generation - the grouped-by-category view.

use folio_core::{format_duration, ExperienceCategory, ExperienceTracker, TrackedSkill};

/// Maximum engagement labels carried per tracked skill.
pub const MAX_SOURCES: usize = 3;

/// Build the per-category trackers from the experience table.
///
/// Skills are stable-sorted by descending total months, so equal totals
/// keep their table order. Zero-month skills are dropped, and a category
/// with no qualifying skills is omitted entirely.
pub fn generate_trackers(table: &[ExperienceCategory]) -> Vec<ExperienceTracker> {
    let mut trackers = Vec::new();

    for category in table {
        let mut skills: Vec<&_> = category.skills.iter().collect();
        skills.sort_by(|a, b| b.months.cmp(&a.months));

        let experiences: Vec<TrackedSkill> = skills
            .into_iter()
            .filter(|s| s.months > 0)
            .map(|s| TrackedSkill {
                name: s.name.clone(),
                total_months: s.months,
                display: format_duration(s.months),
                sources: s.sources.iter().take(MAX_SOURCES).cloned().collect(),
            })
            .collect();

        if !experiences.is_empty() {
            trackers.push(ExperienceTracker {
                category: category.name.clone(),
                experiences,
            });
        }
    }

    trackers
}
