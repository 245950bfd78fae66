use chrono::NaiveDateTime;

use crate::model::breakdown::PayBreakdown;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Weekly total including pay accrued since the detected clock-in.
///
/// Frozen at `total_pay` when the breakdown says the subject is not working.
pub fn live_total(breakdown: &PayBreakdown, seconds_worked: i64) -> f64 {
    if !breakdown.is_currently_working {
        return breakdown.total_pay;
    }
    accrue(breakdown.total_pay, breakdown.current_hourly_rate, seconds_worked)
}

fn accrue(base: f64, rate: f64, seconds_worked: i64) -> f64 {
    let additional_hours = seconds_worked.max(0) as f64 / SECONDS_PER_HOUR;
    base + additional_hours * rate
}

pub fn earnings_per_second(rate: f64) -> f64 {
    rate / SECONDS_PER_HOUR
}

pub fn earnings_per_minute(rate: f64) -> f64 {
    earnings_per_second(rate) * 60.0
}

/// A running work session, started when the detector first reported the
/// subject as working.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveAccrualState {
    pub work_start: NaiveDateTime,
}

impl LiveAccrualState {
    pub fn start(now: NaiveDateTime) -> Self {
        Self { work_start: now }
    }

    pub fn seconds_worked(&self, now: NaiveDateTime) -> i64 {
        (now - self.work_start).num_seconds().max(0)
    }

    pub fn hours_worked(&self, now: NaiveDateTime) -> f64 {
        self.seconds_worked(now) as f64 / SECONDS_PER_HOUR
    }
}
