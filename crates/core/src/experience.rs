//! The static experience table.
//!
//! Month totals are maintained by hand as sums of per-engagement durations,
//! written out as literal sums so each figure can be traced back to its
//! engagements. They are never derived from live data.

/// Experience accumulated in one skill, with the engagements it came from.
#[derive(Debug, Clone)]
pub struct SkillExperience {
    /// Skill name
    pub name: String,

    /// Total months across all engagements
    pub months: u32,

    /// Engagement labels, most significant first
    pub sources: Vec<String>,
}

impl SkillExperience {
    /// Build an entry from a name, a month total, and engagement labels.
    pub fn new(name: &str, months: u32, sources: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            months,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A named category of skills. Table order is significant: it determines
/// tracker order and, downstream, deduplication precedence.
#[derive(Debug, Clone)]
pub struct ExperienceCategory {
    /// Category name
    pub name: String,

    /// Skills in this category, in declaration order
    pub skills: Vec<SkillExperience>,
}

/// Return the static experience table: category -> skill -> months + sources.
pub fn experience_table() -> Vec<ExperienceCategory> {
    vec![
        ExperienceCategory {
            name: "Programming Languages".to_string(),
            skills: vec![
                SkillExperience::new(
                    "Python",
                    1 + 4 + 3 + 2, // Neucom + TTM + Orderbook + LPC Filter
                    &[
                        "Neucom AI (1 month)",
                        "TTM Technologies (4 months)",
                        "Real-Time Orderbook Analysis (3 months)",
                        "LPC-Based Stock Prediction (2 months)",
                    ],
                ),
                SkillExperience::new(
                    "Verilog/SystemVerilog",
                    8 + 8 + 3, // Qynosys + Microchip + Orderbook
                    &[
                        "Qynosys, Inc. (8 months)",
                        "Microchip Technology (8 months)",
                        "Real-Time Orderbook Analysis (3 months)",
                    ],
                ),
                SkillExperience::new(
                    "C++",
                    8 + 3 + 2 + 2, // Qynosys + Orderbook + Sentry + Hydroponic
                    &[
                        "Qynosys, Inc. (8 months)",
                        "Real-Time Orderbook Analysis (3 months)",
                        "Embedded Sentry (2 months)",
                        "Hydroponic Control System (2 months)",
                    ],
                ),
                SkillExperience::new("C#", 1, &["Parallax AV Design (1 month)"]),
                SkillExperience::new("VHDL", 1, &["Vending Machine Controller (1 month)"]),
            ],
        },
        ExperienceCategory {
            name: "Engineering Areas".to_string(),
            skills: vec![
                SkillExperience::new(
                    "Systems Programming",
                    8 + 4 + 3, // Qynosys + TTM + Orderbook
                    &[
                        "Qynosys EW Systems (8 months)",
                        "TTM Technologies (4 months)",
                        "Real-Time Orderbook Analysis (3 months)",
                    ],
                ),
                SkillExperience::new(
                    "Research Engineering",
                    1 + 9 + 3 + 2, // Neucom + NYU VIP + Orderbook + LPC Filter
                    &[
                        "NYU Processor Design Team (9 months)",
                        "Real-Time Orderbook Analysis (3 months)",
                        "LPC-Based Stock Prediction (2 months)",
                        "Neucom AI (1 month)",
                    ],
                ),
                SkillExperience::new(
                    "Embedded Systems",
                    8 + 2 + 2, // Microchip + Sentry + Hydroponic
                    &[
                        "Microchip Technology (8 months)",
                        "Embedded Sentry (2 months)",
                        "Hydroponic Control System (2 months)",
                    ],
                ),
                SkillExperience::new(
                    "Electrical Engineering",
                    8 + 3, // Microchip + Rio Tinto
                    &[
                        "Microchip Technology (8 months)",
                        "Rio Tinto (3 months)",
                    ],
                ),
                SkillExperience::new(
                    "Financial Technology",
                    3 + 2, // Orderbook + LPC Filter
                    &[
                        "Real-Time Orderbook Analysis (3 months)",
                        "LPC-Based Stock Prediction (2 months)",
                    ],
                ),
                SkillExperience::new(
                    "Machine Learning/AI",
                    1 + 3 + 2, // Neucom + Orderbook + LPC Filter
                    &[
                        "Neucom AI (1 month)",
                        "Real-Time Orderbook Analysis (3 months)",
                        "LPC-Based Stock Prediction (2 months)",
                    ],
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        let table = experience_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, "Programming Languages");
        assert_eq!(table[1].name, "Engineering Areas");
    }

    #[test]
    fn known_totals() {
        let table = experience_table();
        let verilog = table[0]
            .skills
            .iter()
            .find(|s| s.name == "Verilog/SystemVerilog")
            .unwrap();
        assert_eq!(verilog.months, 19);
        assert_eq!(verilog.sources.len(), 3);

        let embedded = table[1]
            .skills
            .iter()
            .find(|s| s.name == "Embedded Systems")
            .unwrap();
        assert_eq!(embedded.months, 12);
    }
}
