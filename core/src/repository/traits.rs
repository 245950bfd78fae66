use crate::model::timesheet::TimesheetSnapshot;
use anyhow::Result;

pub trait TimesheetRepository {
    fn load(&self) -> Result<Option<TimesheetSnapshot>>;
    fn save(&self, snapshot: &TimesheetSnapshot) -> Result<()>;
}
