pub mod timesheet;
pub mod traits;

// Re-export
pub use timesheet::FileTimesheetRepository;
pub use traits::TimesheetRepository;
