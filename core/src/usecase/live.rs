use chrono::{Datelike, NaiveDateTime};
use tracing::info;

use crate::model::breakdown::PayBreakdown;
use crate::model::config::PayConfiguration;
use crate::model::work_day::{find_day, WorkDay};
use crate::service::accrual_service::{earnings_per_minute, live_total, LiveAccrualState};
use crate::service::goal_service::{
    daily_discrepancy, potential_loss, project_from, GoalStanding, WeekProjection,
};
use crate::service::pay_service::{allocate, day_pay, split_day};
use crate::service::status_service::is_working;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveEarnings {
    pub seconds_worked: i64,
    pub live_total: f64,
    pub earnings_per_minute: f64,
    pub today_hours: f64,
    pub today_earnings: f64,
    pub today_goal: f64,
    pub daily_standing: GoalStanding,
    /// Pay given up by clocking out before today's goal.
    pub potential_loss: f64,
    /// Week-end projection starting from the live total.
    pub projection: WeekProjection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveTick {
    Accruing(LiveEarnings),
    Frozen { total: f64 },
}

impl LiveTick {
    pub fn total(&self) -> f64 {
        match self {
            LiveTick::Accruing(earnings) => earnings.live_total,
            LiveTick::Frozen { total } => *total,
        }
    }
}

/// Owns the latest breakdown and the running work session.
///
/// Each tick re-runs the work-status detector, so a punch-out that happens
/// mid-session freezes the total on the next tick.
pub struct LiveAccrual {
    config: PayConfiguration,
    work_days: Vec<WorkDay>,
    breakdown: PayBreakdown,
    session: Option<LiveAccrualState>,
    frozen_total: Option<f64>,
}

impl LiveAccrual {
    pub fn new(work_days: Vec<WorkDay>, config: PayConfiguration, now: NaiveDateTime) -> Self {
        let breakdown = allocate(&work_days, &config, now);
        Self {
            config,
            work_days,
            breakdown,
            session: None,
            frozen_total: None,
        }
    }

    /// Swaps in a fresh scrape or new settings.
    ///
    /// The new breakdown already contains the hours reported so far, so any
    /// running session restarts from zero on the next tick.
    pub fn replace(
        &mut self,
        work_days: Vec<WorkDay>,
        config: PayConfiguration,
        now: NaiveDateTime,
    ) {
        *self = Self::new(work_days, config, now);
    }

    pub fn breakdown(&self) -> &PayBreakdown {
        &self.breakdown
    }

    pub fn is_accruing(&self) -> bool {
        self.session.is_some()
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> LiveTick {
        if !is_working(&self.work_days, now) {
            if let Some(session) = self.session.take() {
                info!("Work session ended after {}s", session.seconds_worked(now));
            }
            return LiveTick::Frozen {
                total: self.frozen_total.unwrap_or(self.breakdown.total_pay),
            };
        }

        let session = *self.session.get_or_insert_with(|| {
            info!("Work session detected at {}", now.format("%H:%M:%S"));
            LiveAccrualState::start(now)
        });
        let seconds_worked = session.seconds_worked(now);

        let working = PayBreakdown {
            is_currently_working: true,
            ..self.breakdown
        };
        let total = live_total(&working, seconds_worked);
        self.frozen_total = Some(total);

        let today = now.weekday();
        let session_hours = session.hours_worked(now);
        let reported_today = find_day(&self.work_days, today).map(WorkDay::hours).unwrap_or(0.0);
        let today_hours = reported_today + session_hours;
        let today_goal = self.config.goal_for(today);
        let hours_so_far = self.breakdown.total_hours();
        let session_split = split_day(
            today,
            session_hours,
            hours_so_far,
            self.config.sunday_policy(),
        );
        let projection = project_from(
            hours_so_far + session_hours,
            self.breakdown.overtime_hours + session_split.overtime,
            total,
            &self.config,
            today,
        );

        LiveTick::Accruing(LiveEarnings {
            seconds_worked,
            live_total: total,
            earnings_per_minute: earnings_per_minute(working.current_hourly_rate),
            today_hours,
            today_earnings: day_pay(today, today_hours, hours_so_far + session_hours, &self.config),
            today_goal,
            daily_standing: GoalStanding::from_discrepancy(daily_discrepancy(
                today_hours,
                today_goal,
            )),
            potential_loss: potential_loss(today_hours, today_goal, working.current_hourly_rate),
            projection,
        })
    }
}
