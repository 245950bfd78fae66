use chrono::{NaiveTime, Weekday};
use tracing::warn;

use crate::error::PayError;

/// Punch timestamps arrive as 12-hour clock strings, e.g. "7:32 AM".
pub const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";

pub fn parse_hours(input: &str) -> Result<f64, PayError> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix('h')
        .or_else(|| trimmed.strip_suffix('H'))
        .unwrap_or(trimmed)
        .trim();

    if number.is_empty() {
        return Err(PayError::parse(input, "empty hours value"));
    }

    let hours: f64 = number
        .parse()
        .map_err(|_| PayError::parse(input, "not a number"))?;

    if !hours.is_finite() {
        return Err(PayError::parse(input, "hours must be finite"));
    }
    if hours < 0.0 {
        return Err(PayError::parse(input, "hours cannot be negative"));
    }
    Ok(hours)
}

/// Lenient variant of [`parse_hours`]: a bad value counts as zero hours.
pub fn hours_or_zero(input: &str) -> f64 {
    match parse_hours(input) {
        Ok(hours) => hours,
        Err(e) => {
            warn!("{}; counting as 0h", e);
            0.0
        }
    }
}

pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, PayError> {
    NaiveTime::parse_from_str(input.trim(), TIME_OF_DAY_FORMAT)
        .map_err(|e| PayError::parse(input, e.to_string()))
}

/// Maps a scraped day label onto a weekday.
///
/// The portal labels weekdays by name but sometimes renders the weekend as
/// "Day 6" / "Day 7", so numeric labels (1 = Monday) are accepted as well.
pub fn parse_day_label(label: &str) -> Option<Weekday> {
    let label = label.trim().to_lowercase();
    let numeric = label.strip_prefix("day").unwrap_or(&label).trim();

    if let Ok(n) = numeric.parse::<u8>() {
        return match n {
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            7 => Some(Weekday::Sun),
            _ => None,
        };
    }

    match label.get(..3)? {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
