pub mod error;
pub mod format;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::PayError;
pub use format::{format_currency, format_hours, format_rate};
pub use model::breakdown::{PayBreakdown, RateTier};
pub use model::config::{DailyGoals, PayConfiguration, SundayPolicy};
pub use model::timesheet::{parse_raw_timesheet, to_work_days, PunchRecord, TimesheetSnapshot};
pub use model::work_day::{WorkDay, WEEK};
pub use repository::{FileTimesheetRepository, TimesheetRepository};
pub use service::accrual_service::{earnings_per_minute, earnings_per_second, live_total};
pub use service::goal_service::{projected_week_end_pay, weekly_discrepancy, GoalStanding};
pub use service::pay_service::{allocate, allocate_now};
pub use service::status_service::is_working;
pub use time::{parse_hours, parse_time_of_day};
pub use usecase::dashboard::{Dashboard, DashboardUseCase};
pub use usecase::live::{LiveAccrual, LiveTick};
