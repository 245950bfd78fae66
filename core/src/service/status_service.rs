use chrono::{Datelike, NaiveDateTime};
use tracing::{debug, warn};

use crate::model::work_day::{find_day, WorkDay};
use crate::time::parse_time_of_day;

/// Decides whether the subject is clocked in at `now`.
///
/// Fails safe: when punch times cannot be parsed the answer is `false`.
pub fn is_working(work_days: &[WorkDay], now: NaiveDateTime) -> bool {
    let Some(today) = find_day(work_days, now.weekday()) else {
        return false;
    };

    match (today.punch_in(), today.punch_out()) {
        (Some(_), None) => {
            debug!("Punched in without a punch out on {}", today.day());
            true
        }
        (Some(punch_in), Some(punch_out)) => {
            match (parse_time_of_day(punch_in), parse_time_of_day(punch_out)) {
                (Ok(start), Ok(end)) => {
                    let current = now.time();
                    start < current && current < end
                }
                (Err(e), _) | (_, Err(e)) => {
                    warn!("Cannot determine work status: {}", e);
                    false
                }
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    // 2025-06-11 is a Wednesday.
    fn wednesday_at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 11)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_punched_in_without_punch_out() {
        let days = vec![WorkDay::new(Weekday::Wed, 4.0).punched(Some("9:00 AM"), None)];
        assert!(is_working(&days, wednesday_at(13, 0)));
    }

    #[test]
    fn test_between_punches() {
        let days = vec![WorkDay::new(Weekday::Wed, 8.0).punched(Some("9:00 AM"), Some("5:00 PM"))];
        assert!(is_working(&days, wednesday_at(12, 30)));
        assert!(!is_working(&days, wednesday_at(8, 59)));
        assert!(!is_working(&days, wednesday_at(17, 30)));
        // Boundaries are exclusive.
        assert!(!is_working(&days, wednesday_at(9, 0)));
        assert!(!is_working(&days, wednesday_at(17, 0)));
    }

    #[test]
    fn test_unparsable_punch_is_not_working() {
        let days = vec![WorkDay::new(Weekday::Wed, 8.0).punched(Some("9:00 AM"), Some("--:--"))];
        assert!(!is_working(&days, wednesday_at(12, 0)));
    }

    #[test]
    fn test_no_punches_or_no_record() {
        let days = vec![WorkDay::new(Weekday::Wed, 0.0)];
        assert!(!is_working(&days, wednesday_at(12, 0)));

        let other_day = vec![WorkDay::new(Weekday::Tue, 8.0).punched(Some("9:00 AM"), None)];
        assert!(!is_working(&other_day, wednesday_at(12, 0)));
    }
}
