use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::model::breakdown::PayBreakdown;
use crate::model::config::{DailyGoals, PayConfiguration};
use crate::model::work_day::{find_day, WorkDay, WEEK};
use crate::service::pay_service::{split_day, DaySplit};

/// Signed hours ahead (+) or behind (-) the daily goals for every day that is
/// already over: days before `today`, plus any day with both punches.
pub fn weekly_discrepancy(work_days: &[WorkDay], goals: &DailyGoals, today: Weekday) -> f64 {
    let mut expected = 0.0;
    let mut actual = 0.0;

    for day in WEEK {
        let record = find_day(work_days, day);
        let completed = record.map(WorkDay::is_completed).unwrap_or(false);
        let in_past = day.num_days_from_monday() < today.num_days_from_monday();

        if completed || in_past {
            let hours = record.map(WorkDay::hours).unwrap_or(0.0);
            debug!(
                "{}: goal {}h, actual {}h, completed {}, past {}",
                day,
                goals.get(day),
                hours,
                completed,
                in_past
            );
            expected += goals.get(day);
            actual += hours;
        }
    }

    actual - expected
}

pub fn daily_discrepancy(hours_worked: f64, goal: f64) -> f64 {
    hours_worked - goal
}

/// What clocking out now would cost relative to today's goal.
pub fn potential_loss(hours_worked_today: f64, goal: f64, current_rate: f64) -> f64 {
    (goal - hours_worked_today).max(0.0) * current_rate
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum GoalStanding {
    Ahead(f64),
    Behind(f64),
    OnTrack,
}

/// Anything closer to the goal than this rounds to 0.0h when displayed.
const ON_TRACK_TOLERANCE: f64 = 0.05;

impl GoalStanding {
    pub fn from_discrepancy(discrepancy: f64) -> Self {
        if discrepancy.abs() < ON_TRACK_TOLERANCE {
            GoalStanding::OnTrack
        } else if discrepancy > 0.0 {
            GoalStanding::Ahead(discrepancy)
        } else {
            GoalStanding::Behind(-discrepancy)
        }
    }

    pub fn is_behind(&self) -> bool {
        matches!(self, GoalStanding::Behind(_))
    }

    /// Short form used for a single day.
    pub fn daily_label(&self) -> String {
        match self {
            GoalStanding::Ahead(h) => format!("+{:.1}h ahead", h),
            GoalStanding::Behind(h) => format!("-{:.1}h behind", h),
            GoalStanding::OnTrack => "Right on goal!".to_string(),
        }
    }
}

impl fmt::Display for GoalStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStanding::Ahead(h) => write!(f, "+{:.1}h ahead of goals", h),
            GoalStanding::Behind(h) => write!(f, "-{:.1}h behind goals", h),
            GoalStanding::OnTrack => write!(f, "On track with weekly goals"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekProjection {
    pub remaining_goal_hours: f64,
    pub additional_pay: f64,
    pub projected_total_pay: f64,
    pub projected_overtime_hours: f64,
    pub projected_overtime_pay: f64,
}

/// Goal hours for every day after `today`, classified as if worked.
fn project_remaining(
    actual_hours: f64,
    config: &PayConfiguration,
    today: Weekday,
) -> (f64, DaySplit, f64) {
    let mut cumulative = actual_hours;
    let mut remaining_hours = 0.0;
    let mut totals = DaySplit::default();
    let mut additional_pay = 0.0;

    for day in WEEK
        .iter()
        .copied()
        .filter(|d| d.num_days_from_monday() > today.num_days_from_monday())
    {
        let hours = config.goal_for(day);
        let split = split_day(day, hours, cumulative, config.sunday_policy());

        additional_pay += split.pay(config);
        totals.regular += split.regular;
        totals.overtime += split.overtime;
        totals.sunday_premium += split.sunday_premium;
        remaining_hours += hours;
        cumulative += hours;
    }

    (remaining_hours, totals, additional_pay)
}

/// Week-end pay assuming every remaining day meets its goal.
pub fn projected_week_end_pay(
    actual_hours: f64,
    actual_pay: f64,
    config: &PayConfiguration,
    today: Weekday,
) -> f64 {
    let (_, _, additional_pay) = project_remaining(actual_hours, config, today);
    actual_pay + additional_pay
}

pub fn project_week(
    breakdown: &PayBreakdown,
    config: &PayConfiguration,
    today: Weekday,
) -> WeekProjection {
    project_from(
        breakdown.total_hours(),
        breakdown.overtime_hours,
        breakdown.total_pay,
        config,
        today,
    )
}

/// Projection from an arbitrary point in the week, e.g. mid-session where
/// hours and pay include time not yet on the timesheet.
pub fn project_from(
    hours_so_far: f64,
    overtime_so_far: f64,
    pay_so_far: f64,
    config: &PayConfiguration,
    today: Weekday,
) -> WeekProjection {
    let (remaining_goal_hours, split, additional_pay) =
        project_remaining(hours_so_far, config, today);
    let projected_overtime_hours = overtime_so_far + split.overtime;

    WeekProjection {
        remaining_goal_hours,
        additional_pay,
        projected_total_pay: pay_so_far + additional_pay,
        projected_overtime_hours,
        projected_overtime_pay: projected_overtime_hours * config.overtime_rate(),
    }
}
