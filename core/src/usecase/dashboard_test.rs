use crate::model::config::{DailyGoals, PayConfiguration};
use crate::model::timesheet::{PunchRecord, TimesheetSnapshot};
use crate::repository::TimesheetRepository;
use crate::service::goal_service::GoalStanding;
use crate::usecase::dashboard::DashboardUseCase;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Weekday};

struct MockTimesheetRepo {
    snapshot: Option<TimesheetSnapshot>,
}

impl TimesheetRepository for MockTimesheetRepo {
    fn load(&self) -> Result<Option<TimesheetSnapshot>> { Ok(self.snapshot.clone()) }
    fn save(&self, _snapshot: &TimesheetSnapshot) -> Result<()> { unimplemented!() }
}

fn record(day: &str, punch_in: Option<&str>, punch_out: Option<&str>, hours: &str) -> PunchRecord {
    PunchRecord {
        day: day.to_string(),
        punch_in: punch_in.map(str::to_string),
        punch_out: punch_out.map(str::to_string),
        total_hours: Some(hours.to_string()),
    }
}

// 2025-06-11 is a Wednesday.
fn wednesday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 11).unwrap().and_hms_opt(hour, 0, 0).unwrap()
}

#[test]
fn test_dashboard_without_snapshot() {
    let repo = MockTimesheetRepo { snapshot: None };
    let config = PayConfiguration::new(20.0, DailyGoals::default()).unwrap();
    let usecase = DashboardUseCase::new(&repo, &config);
    assert!(usecase.load(wednesday_at(12)).unwrap().is_none());
}

#[test]
fn test_dashboard_mid_week() {
    let snapshot = TimesheetSnapshot::new(vec![
        record("Monday", Some("8:00 AM"), Some("5:00 PM"), "9.0h"),
        record("Tuesday", Some("8:00 AM"), Some("2:00 PM"), "6.0h"),
        record("Wednesday", Some("9:00 AM"), None, "4.0h"),
        record("Day 7", None, None, "bogus"),
    ]);
    let fetched_at = snapshot.fetched_at;
    let repo = MockTimesheetRepo { snapshot: Some(snapshot) };
    let config = PayConfiguration::new(20.0, DailyGoals::default()).unwrap();
    let usecase = DashboardUseCase::new(&repo, &config);

    let dashboard = usecase.load(wednesday_at(13)).unwrap().unwrap();

    assert_eq!(dashboard.fetched_at, Some(fetched_at));
    assert_eq!(dashboard.today, Weekday::Wed);
    assert_eq!(dashboard.breakdown.regular_hours, 19.0);
    assert_eq!(dashboard.breakdown.total_pay, 380.0);
    assert!(dashboard.breakdown.is_currently_working);

    // Mon +1, Tue -2; Wednesday is still open.
    assert_eq!(dashboard.weekly_discrepancy, -1.0);
    assert_eq!(dashboard.standing, GoalStanding::Behind(1.0));

    assert_eq!(dashboard.days.len(), 7);
    assert_eq!(dashboard.days[0].discrepancy, Some(1.0));
    assert_eq!(dashboard.days[2].discrepancy, None);
    assert_eq!(dashboard.days[6].hours, 0.0);

    assert_eq!(dashboard.today_goal, 8.0);
    assert_eq!(dashboard.today_hours, 4.0);
    assert_eq!(dashboard.today_pay, 80.0);

    // Thu 8 + Fri 8 regular, Sat 7 -> 5 regular + 2 overtime, Sun 7 premium.
    assert_eq!(dashboard.projection.remaining_goal_hours, 30.0);
    assert_eq!(dashboard.projection.projected_overtime_hours, 2.0);
    assert_eq!(
        dashboard.projection.projected_total_pay,
        380.0 + 21.0 * 20.0 + 2.0 * 30.0 + 7.0 * 40.0
    );
}
