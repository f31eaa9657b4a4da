//! Duration decomposition and the human-readable templates used across the
//! CLI, the timer loop, and the spreadsheet export.

/// Floor-division decomposition of a duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Split a duration into whole days, hours within the day, minutes and
/// seconds. Fractional and negative inputs are floored to zero whole seconds.
pub fn split_duration(total_seconds: f64) -> DurationParts {
    let total = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds.floor() as u64
    } else {
        0
    };

    let days = total / 86_400;
    let rem = total % 86_400;

    DurationParts {
        days,
        hours: rem / 3_600,
        minutes: (rem % 3_600) / 60,
        seconds: rem % 60,
    }
}

/// Template used for live displays: `"H hours, M minutes, S seconds"`.
/// The days field is intentionally left out.
pub fn hours_minutes_seconds(total_seconds: f64) -> String {
    let p = split_duration(total_seconds);
    format!(
        "{} hours, {} minutes, {} seconds",
        p.hours, p.minutes, p.seconds
    )
}

/// Template used for spreadsheet cells: `"H hours, M minutes"`.
pub fn hours_minutes(total_seconds: f64) -> String {
    let p = split_duration(total_seconds);
    format!("{} hours, {} minutes", p.hours, p.minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_by_floor_division() {
        let p = split_duration(3661.0);
        assert_eq!(
            p,
            DurationParts {
                days: 0,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn hours_roll_over_into_days() {
        // 25h 30m: the hours field stays within the day
        let p = split_duration(25.0 * 3600.0 + 30.0 * 60.0);
        assert_eq!(p.days, 1);
        assert_eq!(p.hours, 1);
        assert_eq!(p.minutes, 30);
    }

    #[test]
    fn formats_the_live_template() {
        assert_eq!(hours_minutes_seconds(3661.0), "1 hours, 1 minutes, 1 seconds");
        assert_eq!(hours_minutes_seconds(0.0), "0 hours, 0 minutes, 0 seconds");
    }

    #[test]
    fn formats_the_cell_template() {
        assert_eq!(hours_minutes(3661.0), "1 hours, 1 minutes");
        assert_eq!(hours_minutes(7200.0), "2 hours, 0 minutes");
    }

    #[test]
    fn tolerates_non_finite_input() {
        assert_eq!(hours_minutes(f64::NAN), "0 hours, 0 minutes");
        assert_eq!(hours_minutes(-5.0), "0 hours, 0 minutes");
    }
}
