use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::PayError;
use crate::model::work_day::WEEK;

pub const OVERTIME_THRESHOLD: f64 = 40.0;
pub const OVERTIME_MULTIPLIER: f64 = 1.5;
pub const SUNDAY_PREMIUM_MULTIPLIER: f64 = 2.0;

pub const DEFAULT_WEEKDAY_GOAL: f64 = 8.0;
pub const DEFAULT_WEEKEND_GOAL: f64 = 7.0;

/// How Sunday hours are billed.
///
/// `Unconditional` bills every Sunday hour at the premium rate.
/// `AfterThreshold` bills Sunday hours as regular time until the weekly
/// 40-hour threshold is reached and only the remainder at the premium.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SundayPolicy {
    #[default]
    Unconditional,
    AfterThreshold,
}

/// Target hours for each weekday.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DailyGoals {
    hours: [f64; 7],
}

impl Default for DailyGoals {
    fn default() -> Self {
        let mut hours = [DEFAULT_WEEKDAY_GOAL; 7];
        hours[5] = DEFAULT_WEEKEND_GOAL;
        hours[6] = DEFAULT_WEEKEND_GOAL;
        Self { hours }
    }
}

impl DailyGoals {
    pub fn get(&self, day: Weekday) -> f64 {
        self.hours[day.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, day: Weekday, hours: f64) {
        self.hours[day.num_days_from_monday() as usize] = hours;
    }

    pub fn weekly_total(&self) -> f64 {
        self.hours.iter().sum()
    }

    fn validate(&self) -> Result<(), PayError> {
        for day in WEEK {
            let goal = self.get(day);
            if !goal.is_finite() || goal < 0.0 {
                return Err(PayError::Configuration(format!(
                    "goal for {} must be a non-negative number of hours, got {}",
                    day, goal
                )));
            }
        }
        Ok(())
    }
}

/// Validated pay settings. Every service assumes a positive base rate, so the
/// only way to build one is through [`PayConfiguration::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayConfiguration {
    base_hourly_rate: f64,
    daily_goals: DailyGoals,
    sunday_policy: SundayPolicy,
}

impl PayConfiguration {
    pub fn new(base_hourly_rate: f64, daily_goals: DailyGoals) -> Result<Self, PayError> {
        if !base_hourly_rate.is_finite() || base_hourly_rate <= 0.0 {
            return Err(PayError::Configuration(format!(
                "base hourly rate must be positive, got {}",
                base_hourly_rate
            )));
        }
        daily_goals.validate()?;

        Ok(Self {
            base_hourly_rate,
            daily_goals,
            sunday_policy: SundayPolicy::default(),
        })
    }

    pub fn with_sunday_policy(mut self, policy: SundayPolicy) -> Self {
        self.sunday_policy = policy;
        self
    }

    pub fn base_hourly_rate(&self) -> f64 {
        self.base_hourly_rate
    }

    pub fn overtime_rate(&self) -> f64 {
        self.base_hourly_rate * OVERTIME_MULTIPLIER
    }

    pub fn sunday_premium_rate(&self) -> f64 {
        self.base_hourly_rate * SUNDAY_PREMIUM_MULTIPLIER
    }

    pub fn daily_goals(&self) -> &DailyGoals {
        &self.daily_goals
    }

    pub fn goal_for(&self, day: Weekday) -> f64 {
        self.daily_goals.get(day)
    }

    pub fn sunday_policy(&self) -> SundayPolicy {
        self.sunday_policy
    }
}
