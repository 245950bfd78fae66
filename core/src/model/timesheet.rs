use anyhow::{Context, Result};
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PayError;
use crate::model::work_day::{WorkDay, WEEK};
use crate::time::{hours_or_zero, parse_day_label};

/// A single timesheet row as delivered by the scraper.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PunchRecord {
    pub day: String,
    #[serde(default)]
    pub punch_in: Option<String>,
    #[serde(default)]
    pub punch_out: Option<String>,
    #[serde(default)]
    pub total_hours: Option<String>,
}

/// The last imported scrape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimesheetSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<PunchRecord>,
}

impl TimesheetSnapshot {
    pub fn new(records: Vec<PunchRecord>) -> Self {
        Self {
            fetched_at: Utc::now(),
            records,
        }
    }

    pub fn work_days(&self) -> Vec<WorkDay> {
        to_work_days(&self.records)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimesheet {
    Records(Vec<PunchRecord>),
    Lines(Vec<String>),
}

/// Accepts either an array of record objects or the scraper's flat array of
/// `"<Day> Punch In: ..."` lines.
pub fn parse_raw_timesheet(raw: &str) -> Result<Vec<PunchRecord>> {
    let parsed: RawTimesheet =
        serde_json::from_str(raw.trim())
            .context("Timesheet payload is not a JSON array of records or lines")?;

    Ok(match parsed {
        RawTimesheet::Records(records) => records,
        RawTimesheet::Lines(lines) => parse_extraction_lines(&lines),
    })
}

const PUNCH_IN_MARKER: &str = " Punch In:";
const PUNCH_OUT_MARKER: &str = " Punch Out:";
const HOURS_MARKER: &str = " Hours:";

pub fn parse_extraction_lines(lines: &[String]) -> Vec<PunchRecord> {
    let mut records: Vec<PunchRecord> = Vec::new();

    for line in lines {
        let line = line.trim();
        let Some((day, marker, value)) = split_line(line) else {
            debug!("Ignoring extraction line: {}", line);
            continue;
        };

        let pos = match records.iter().position(|r| r.day == day) {
            Some(pos) => pos,
            None => {
                records.push(PunchRecord {
                    day: day.to_string(),
                    ..Default::default()
                });
                records.len() - 1
            }
        };

        let record = &mut records[pos];
        let value = Some(value.to_string());
        match marker {
            PUNCH_IN_MARKER => record.punch_in = value,
            PUNCH_OUT_MARKER => record.punch_out = value,
            _ => record.total_hours = value,
        }
    }

    records
}

fn split_line(line: &str) -> Option<(&str, &'static str, &str)> {
    for marker in [PUNCH_IN_MARKER, PUNCH_OUT_MARKER, HOURS_MARKER] {
        if let Some((day, value)) = line.split_once(marker) {
            let day = day.trim();
            if !day.is_empty() {
                return Some((day, marker, value.trim()));
            }
        }
    }
    None
}

/// Builds exactly one `WorkDay` per weekday, Monday first.
///
/// Days without a record are zero-hour, unpunched days. When the scraper
/// reports the same weekday twice the first record wins.
pub fn to_work_days(records: &[PunchRecord]) -> Vec<WorkDay> {
    let mut by_day: Vec<(Weekday, &PunchRecord)> = Vec::new();
    for record in records {
        match parse_day_label(&record.day) {
            Some(day) if by_day.iter().any(|(d, _)| *d == day) => {
                warn!("Duplicate timesheet record for {}; keeping the first", day);
            }
            Some(day) => by_day.push((day, record)),
            None => warn!("Unrecognized day label '{}'; skipping", record.day),
        }
    }

    WEEK.iter()
        .map(|&day| match by_day.iter().find(|(d, _)| *d == day) {
            Some((_, record)) => {
                let hours = record.total_hours.as_deref().map(hours_or_zero).unwrap_or(0.0);
                WorkDay::new(day, hours)
                    .punched(record.punch_in.as_deref(), record.punch_out.as_deref())
            }
            None => {
                debug!("{}; counting as 0h", PayError::MissingData(day));
                WorkDay::new(day, 0.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_objects() {
        let raw = r#"[
            {"day": "Monday", "punchIn": "9:00 AM", "punchOut": "5:00 PM", "totalHours": "8.0h"},
            {"day": "Day 6", "punchIn": null, "punchOut": null, "totalHours": null}
        ]"#;

        let records = parse_raw_timesheet(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].punch_in.as_deref(), Some("9:00 AM"));
        assert_eq!(records[1].day, "Day 6");
        assert_eq!(records[1].total_hours, None);
    }

    #[test]
    fn test_parse_extraction_lines() {
        let raw = r#"[
            "Monday Punch In: 9:00 AM",
            "Monday Punch Out: 5:30 PM",
            "Monday Hours: 8.5h",
            "Tuesday Punch In: 8:45 AM",
            "Scroll complete"
        ]"#;

        let records = parse_raw_timesheet(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].day, "Monday");
        assert_eq!(records[0].punch_out.as_deref(), Some("5:30 PM"));
        assert_eq!(records[0].total_hours.as_deref(), Some("8.5h"));
        assert_eq!(records[1].punch_in.as_deref(), Some("8:45 AM"));
        assert_eq!(records[1].punch_out, None);
    }

    #[test]
    fn test_invalid_payload() {
        assert!(parse_raw_timesheet("{\"day\": \"Monday\"}").is_err());
        assert!(parse_raw_timesheet("not json").is_err());
    }

    #[test]
    fn test_to_work_days_fills_the_week() {
        let records = vec![
            PunchRecord {
                day: "Wednesday".to_string(),
                punch_in: Some("9:00 AM".to_string()),
                punch_out: None,
                total_hours: Some("4.25h".to_string()),
            },
            PunchRecord {
                day: "Wed".to_string(),
                total_hours: Some("9.0h".to_string()),
                ..Default::default()
            },
            PunchRecord {
                day: "Day 7".to_string(),
                total_hours: Some("garbage".to_string()),
                ..Default::default()
            },
            PunchRecord {
                day: "Totals".to_string(),
                total_hours: Some("40h".to_string()),
                ..Default::default()
            },
        ];

        let days = to_work_days(&records);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day(), Weekday::Mon);
        assert_eq!(days[0].hours(), 0.0);
        assert_eq!(days[2].hours(), 4.25);
        assert_eq!(days[2].punch_in(), Some("9:00 AM"));
        assert_eq!(days[6].day(), Weekday::Sun);
        assert_eq!(days[6].hours(), 0.0);
    }
}
