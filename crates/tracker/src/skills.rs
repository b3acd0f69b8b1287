//! Skills conversion - the flattened view for the template's progress bars.

use std::collections::HashSet;

use folio_core::{ExperienceTracker, SkillDisplay};

/// Maximum entries in the flattened skills list.
pub const MAX_SKILLS: usize = 12;

/// Months-to-proficiency scale; 25 months saturates the bar.
const MONTHS_SCALE: u32 = 4;

/// Proficiency floor and ceiling.
const MIN_PROFICIENCY: u32 = 10;
const MAX_PROFICIENCY: u32 = 100;

/// Flatten trackers into the skills list.
///
/// Trackers are walked in order; the first occurrence of a name wins,
/// the accepted count is capped at [`MAX_SKILLS`], and sub-month entries
/// are skipped. The result is stable-sorted by descending proficiency,
/// so ties keep flattening order.
pub fn convert_to_skills(trackers: &[ExperienceTracker]) -> Vec<SkillDisplay> {
    let mut skills = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for tracker in trackers {
        for exp in &tracker.experiences {
            if seen.contains(exp.name.as_str()) || skills.len() >= MAX_SKILLS {
                continue;
            }
            if exp.total_months < 1 {
                continue;
            }

            let proficiency =
                (exp.total_months * MONTHS_SCALE).clamp(MIN_PROFICIENCY, MAX_PROFICIENCY);

            skills.push(SkillDisplay {
                name: exp.name.clone(),
                proficiency,
                proficiency_label: exp.display.clone(),
            });
            seen.insert(exp.name.as_str());
        }
    }

    skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    skills
}
