use chrono::Weekday;

/// Monday-first ordering used for every weekly calculation.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One calendar day of observed timesheet data.
///
/// Punch times stay in the portal's raw `h:mm a` form; they are only parsed
/// when the work-status detector needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDay {
    day: Weekday,
    punch_in: Option<String>,
    punch_out: Option<String>,
    hours: f64,
}

impl WorkDay {
    pub fn new(day: Weekday, hours: f64) -> Self {
        let hours = if hours.is_finite() && hours > 0.0 { hours } else { 0.0 };
        Self {
            day,
            punch_in: None,
            punch_out: None,
            hours,
        }
    }

    pub fn punched(mut self, punch_in: Option<&str>, punch_out: Option<&str>) -> Self {
        self.punch_in = non_empty(punch_in);
        self.punch_out = non_empty(punch_out);
        self
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn punch_in(&self) -> Option<&str> {
        self.punch_in.as_deref()
    }

    pub fn punch_out(&self) -> Option<&str> {
        self.punch_out.as_deref()
    }

    /// A day is completed once it has both a punch-in and a punch-out.
    pub fn is_completed(&self) -> bool {
        self.punch_in.is_some() && self.punch_out.is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn find_day(work_days: &[WorkDay], day: Weekday) -> Option<&WorkDay> {
    work_days.iter().find(|d| d.day == day)
}
