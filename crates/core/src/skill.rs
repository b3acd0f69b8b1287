//! Skill display model - the flattened view with a proficiency score.

use serde::Serialize;

/// A skill as the portfolio template's progress bars consume it.
///
/// The proficiency score is a display metric only (months scaled onto
/// 10..=100), not a measured skill level; the label just shows the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDisplay {
    /// Skill name
    pub name: String,

    /// Score in 10..=100 for the progress bar
    pub proficiency: u32,

    /// Human-readable duration shown next to the bar
    pub proficiency_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_field_names() {
        let skill = SkillDisplay {
            name: "Rust".to_string(),
            proficiency: 52,
            proficiency_label: "1 year 1 month".to_string(),
        };

        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["name"], "Rust");
        assert_eq!(json["proficiency"], 52);
        assert_eq!(json["proficiency_label"], "1 year 1 month");
    }
}
