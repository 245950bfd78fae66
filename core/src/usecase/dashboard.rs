use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDateTime, Utc, Weekday};
use serde::Serialize;

use crate::model::breakdown::PayBreakdown;
use crate::model::config::PayConfiguration;
use crate::model::work_day::{find_day, WorkDay};
use crate::repository::TimesheetRepository;
use crate::service::goal_service::{
    daily_discrepancy, project_week, weekly_discrepancy, GoalStanding, WeekProjection,
};
use crate::service::pay_service::{allocate, day_pay};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayRow {
    pub day: Weekday,
    pub punch_in: Option<String>,
    pub punch_out: Option<String>,
    pub hours: f64,
    pub goal: f64,
    pub completed: bool,
    /// Only set for days that count toward the weekly discrepancy.
    pub discrepancy: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub fetched_at: Option<DateTime<Utc>>,
    pub today: Weekday,
    pub breakdown: PayBreakdown,
    pub days: Vec<DayRow>,
    pub weekly_discrepancy: f64,
    pub standing: GoalStanding,
    pub today_goal: f64,
    pub today_hours: f64,
    pub today_pay: f64,
    pub projection: WeekProjection,
}

impl Dashboard {
    pub fn build(work_days: &[WorkDay], config: &PayConfiguration, now: NaiveDateTime) -> Self {
        let today = now.weekday();
        let breakdown = allocate(work_days, config, now);
        let discrepancy = weekly_discrepancy(work_days, config.daily_goals(), today);

        let mut days: Vec<DayRow> = work_days
            .iter()
            .map(|d| {
                let goal = config.goal_for(d.day());
                let in_past = d.day().num_days_from_monday() < today.num_days_from_monday();
                let counted = d.is_completed() || in_past;
                DayRow {
                    day: d.day(),
                    punch_in: d.punch_in().map(str::to_string),
                    punch_out: d.punch_out().map(str::to_string),
                    hours: d.hours(),
                    goal,
                    completed: d.is_completed(),
                    discrepancy: counted.then(|| daily_discrepancy(d.hours(), goal)),
                }
            })
            .collect();
        days.sort_by_key(|row| row.day.number_from_monday());

        let today_hours = find_day(work_days, today).map(WorkDay::hours).unwrap_or(0.0);

        Self {
            fetched_at: None,
            today,
            days,
            weekly_discrepancy: discrepancy,
            standing: GoalStanding::from_discrepancy(discrepancy),
            today_goal: config.goal_for(today),
            today_hours,
            today_pay: day_pay(today, today_hours, breakdown.total_hours(), config),
            projection: project_week(&breakdown, config, today),
            breakdown,
        }
    }
}

pub struct DashboardUseCase<'a, R: TimesheetRepository> {
    repo: &'a R,
    config: &'a PayConfiguration,
}

impl<'a, R: TimesheetRepository> DashboardUseCase<'a, R> {
    pub fn new(repo: &'a R, config: &'a PayConfiguration) -> Self {
        Self { repo, config }
    }

    /// Returns `None` until a timesheet has been imported.
    pub fn load(&self, now: NaiveDateTime) -> Result<Option<Dashboard>> {
        let Some(snapshot) = self.repo.load()? else {
            return Ok(None);
        };

        let mut dashboard = Dashboard::build(&snapshot.work_days(), self.config, now);
        dashboard.fetched_at = Some(snapshot.fetched_at);
        Ok(Some(dashboard))
    }
}
