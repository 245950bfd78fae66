pub mod breakdown;
pub mod config;
pub mod timesheet;
pub mod work_day;
