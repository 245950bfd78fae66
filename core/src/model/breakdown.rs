use serde::{Deserialize, Serialize};
use std::fmt;

/// The next pay-rate transition available this week.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum RateTier {
    Overtime { hours_remaining: f64 },
    SundayPremium,
    MaximumRate,
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateTier::Overtime { hours_remaining } => {
                write!(f, "Overtime ({:.1}h remaining)", hours_remaining)
            }
            RateTier::SundayPremium => write!(f, "Sunday Premium (work Sunday for 2x rate)"),
            RateTier::MaximumRate => write!(f, "Maximum rate achieved"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PayBreakdown {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub sunday_premium_hours: f64,
    pub regular_pay: f64,
    pub overtime_pay: f64,
    pub sunday_premium_pay: f64,
    pub total_pay: f64,
    pub current_hourly_rate: f64,
    pub is_currently_working: bool,
    pub hours_until_overtime: f64,
    pub next_rate_tier: RateTier,
}

impl PayBreakdown {
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours + self.sunday_premium_hours
    }
}
