//! Month-count to human-readable duration formatting.

/// Format a month count as a readable duration string.
///
/// Counts under a year render as "<n> month[s]"; otherwise the year part
/// comes first and a non-zero remainder of months is appended. Quantities
/// of exactly 1 are singular.
pub fn format_duration(months: u32) -> String {
    if months < 12 {
        return format!("{} month{}", months, plural(months));
    }

    let years = months / 12;
    let remaining = months % 12;

    if remaining == 0 {
        format!("{} year{}", years, plural(years))
    } else {
        format!(
            "{} year{} {} month{}",
            years,
            plural(years),
            remaining,
            plural(remaining)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_under_a_year() {
        assert_eq!(format_duration(0), "0 months");
        assert_eq!(format_duration(1), "1 month");
        assert_eq!(format_duration(2), "2 months");
        assert_eq!(format_duration(11), "11 months");
    }

    #[test]
    fn whole_years() {
        assert_eq!(format_duration(12), "1 year");
        assert_eq!(format_duration(24), "2 years");
    }

    #[test]
    fn years_with_remainder() {
        assert_eq!(format_duration(13), "1 year 1 month");
        assert_eq!(format_duration(19), "1 year 7 months");
        assert_eq!(format_duration(25), "2 years 1 month");
        assert_eq!(format_duration(26), "2 years 2 months");
    }
}
