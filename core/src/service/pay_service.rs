use chrono::{Datelike, Local, NaiveDateTime, Weekday};
use tracing::debug;

use crate::model::breakdown::{PayBreakdown, RateTier};
use crate::model::config::{PayConfiguration, SundayPolicy, OVERTIME_THRESHOLD};
use crate::model::work_day::WorkDay;
use crate::service::status_service::is_working;

/// How one day's hours fall into the three pay buckets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DaySplit {
    pub regular: f64,
    pub overtime: f64,
    pub sunday_premium: f64,
}

impl DaySplit {
    pub fn pay(&self, config: &PayConfiguration) -> f64 {
        self.regular * config.base_hourly_rate()
            + self.overtime * config.overtime_rate()
            + self.sunday_premium * config.sunday_premium_rate()
    }
}

/// Splits `hours` worked on `day`, given the hours already worked earlier in
/// the week.
pub fn split_day(day: Weekday, hours: f64, cumulative: f64, policy: SundayPolicy) -> DaySplit {
    let before_overtime = (OVERTIME_THRESHOLD - cumulative).max(0.0);

    if day == Weekday::Sun {
        return match policy {
            SundayPolicy::Unconditional => DaySplit {
                sunday_premium: hours,
                ..Default::default()
            },
            SundayPolicy::AfterThreshold => {
                let regular = hours.min(before_overtime);
                DaySplit {
                    regular,
                    sunday_premium: hours - regular,
                    ..Default::default()
                }
            }
        };
    }

    let regular = hours.min(before_overtime);
    DaySplit {
        regular,
        overtime: hours - regular,
        ..Default::default()
    }
}

pub fn allocate(
    work_days: &[WorkDay],
    config: &PayConfiguration,
    now: NaiveDateTime,
) -> PayBreakdown {
    let mut sorted: Vec<&WorkDay> = work_days.iter().collect();
    sorted.sort_by_key(|d| d.day().number_from_monday());

    let mut totals = DaySplit::default();
    let mut cumulative = 0.0;

    for day in sorted {
        let split = split_day(day.day(), day.hours(), cumulative, config.sunday_policy());
        debug!(
            "{}: {}h (cumulative {}h) -> regular {}h, overtime {}h, sunday {}h",
            day.day(),
            day.hours(),
            cumulative,
            split.regular,
            split.overtime,
            split.sunday_premium
        );

        totals.regular += split.regular;
        totals.overtime += split.overtime;
        totals.sunday_premium += split.sunday_premium;
        cumulative += day.hours();
    }

    let regular_pay = totals.regular * config.base_hourly_rate();
    let overtime_pay = totals.overtime * config.overtime_rate();
    let sunday_premium_pay = totals.sunday_premium * config.sunday_premium_rate();
    let total_pay = regular_pay + overtime_pay + sunday_premium_pay;

    debug!(
        "Allocated {}h at ${}/hr: regular ${}, overtime ${}, sunday ${}, total ${}",
        cumulative,
        config.base_hourly_rate(),
        regular_pay,
        overtime_pay,
        sunday_premium_pay,
        total_pay
    );

    let today = now.weekday();

    PayBreakdown {
        regular_hours: totals.regular,
        overtime_hours: totals.overtime,
        sunday_premium_hours: totals.sunday_premium,
        regular_pay,
        overtime_pay,
        sunday_premium_pay,
        total_pay,
        current_hourly_rate: current_hourly_rate(cumulative, today, config),
        is_currently_working: is_working(work_days, now),
        hours_until_overtime: (OVERTIME_THRESHOLD - cumulative).max(0.0),
        next_rate_tier: next_rate_tier(cumulative, today),
    }
}

pub fn allocate_now(work_days: &[WorkDay], config: &PayConfiguration) -> PayBreakdown {
    allocate(work_days, config, Local::now().naive_local())
}

fn current_hourly_rate(cumulative: f64, today: Weekday, config: &PayConfiguration) -> f64 {
    if cumulative >= OVERTIME_THRESHOLD {
        if today == Weekday::Sun {
            config.sunday_premium_rate()
        } else {
            config.overtime_rate()
        }
    } else {
        config.base_hourly_rate()
    }
}

fn next_rate_tier(cumulative: f64, today: Weekday) -> RateTier {
    if cumulative < OVERTIME_THRESHOLD {
        RateTier::Overtime {
            hours_remaining: OVERTIME_THRESHOLD - cumulative,
        }
    } else if today != Weekday::Sun {
        RateTier::SundayPremium
    } else {
        RateTier::MaximumRate
    }
}

/// Pay earned by `today_hours` on `today`, where `weekly_hours` is the week
/// total including them.
pub fn day_pay(
    today: Weekday,
    today_hours: f64,
    weekly_hours: f64,
    config: &PayConfiguration,
) -> f64 {
    let before_today = (weekly_hours - today_hours).max(0.0);
    split_day(today, today_hours, before_today, config.sunday_policy()).pay(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::DailyGoals;
    use chrono::NaiveDate;

    fn config(rate: f64) -> PayConfiguration {
        PayConfiguration::new(rate, DailyGoals::default()).unwrap()
    }

    // 2025-06-09 is a Monday.
    fn at(day: Weekday, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 9 + day.num_days_from_monday())
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn week(hours: &[(Weekday, f64)]) -> Vec<WorkDay> {
        hours.iter().map(|&(d, h)| WorkDay::new(d, h)).collect()
    }

    fn mon_to_fri(hours: f64) -> Vec<WorkDay> {
        week(&[
            (Weekday::Mon, hours),
            (Weekday::Tue, hours),
            (Weekday::Wed, hours),
            (Weekday::Thu, hours),
            (Weekday::Fri, hours),
        ])
    }

    #[test]
    fn test_forty_hour_week_is_all_regular() {
        let b = allocate(&mon_to_fri(8.0), &config(20.0), at(Weekday::Sat, 10));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.overtime_hours, 0.0);
        assert_eq!(b.sunday_premium_hours, 0.0);
        assert_eq!(b.total_pay, 800.0);
        assert_eq!(b.hours_until_overtime, 0.0);
    }

    #[test]
    fn test_saturday_after_forty_is_overtime() {
        let mut days = mon_to_fri(8.0);
        days.push(WorkDay::new(Weekday::Sat, 5.0));

        let b = allocate(&days, &config(20.0), at(Weekday::Sat, 18));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.overtime_hours, 5.0);
        assert_eq!(b.overtime_pay, 150.0);
        assert_eq!(b.total_pay, 950.0);
        assert_eq!(b.current_hourly_rate, 30.0);
        assert_eq!(b.next_rate_tier, RateTier::SundayPremium);
    }

    #[test]
    fn test_sunday_only_is_premium() {
        let days = week(&[(Weekday::Sun, 6.0)]);
        let b = allocate(&days, &config(20.0), at(Weekday::Sun, 18));
        assert_eq!(b.sunday_premium_hours, 6.0);
        assert_eq!(b.regular_hours, 0.0);
        assert_eq!(b.overtime_hours, 0.0);
        assert_eq!(b.total_pay, 240.0);
        // Below the threshold the next hour is still paid at the base rate.
        assert_eq!(b.current_hourly_rate, 20.0);
        assert_eq!(b.hours_until_overtime, 34.0);
    }

    #[test]
    fn test_under_threshold_has_no_overtime() {
        let days = week(&[(Weekday::Mon, 9.5), (Weekday::Tue, 10.25), (Weekday::Sat, 12.0)]);
        let b = allocate(&days, &config(18.0), at(Weekday::Sat, 20));
        assert_eq!(b.regular_hours, 31.75);
        assert_eq!(b.overtime_hours, 0.0);
        assert_eq!(b.hours_until_overtime, 8.25);
        assert_eq!(b.next_rate_tier, RateTier::Overtime { hours_remaining: 8.25 });
        assert_eq!(b.current_hourly_rate, 18.0);
    }

    #[test]
    fn test_threshold_split_on_crossing_day_only() {
        let days = week(&[
            (Weekday::Mon, 12.0),
            (Weekday::Tue, 12.0),
            (Weekday::Wed, 12.0),
            (Weekday::Thu, 10.0),
            (Weekday::Fri, 3.0),
        ]);

        let mut cumulative = 0.0;
        let mut splits = Vec::new();
        for d in &days {
            splits.push(split_day(d.day(), d.hours(), cumulative, SundayPolicy::Unconditional));
            cumulative += d.hours();
        }
        assert_eq!(splits[2].overtime, 0.0);
        assert_eq!(splits[3].regular, 4.0);
        assert_eq!(splits[3].overtime, 6.0);
        assert_eq!(splits[4].regular, 0.0);

        let b = allocate(&days, &config(20.0), at(Weekday::Fri, 17));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.overtime_hours, 9.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_allocation() {
        let days = week(&[
            (Weekday::Sat, 10.0),
            (Weekday::Mon, 10.0),
            (Weekday::Wed, 10.0),
            (Weekday::Tue, 10.0),
            (Weekday::Thu, 5.0),
        ]);
        let b = allocate(&days, &config(20.0), at(Weekday::Sat, 20));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.overtime_hours, 5.0);
    }

    #[test]
    fn test_sunday_hours_count_toward_cumulative_total() {
        let mut days = mon_to_fri(8.0);
        days.push(WorkDay::new(Weekday::Sun, 4.0));

        let b = allocate(&days, &config(20.0), at(Weekday::Sun, 20));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.overtime_hours, 0.0);
        assert_eq!(b.sunday_premium_hours, 4.0);
        assert_eq!(b.total_pay, 800.0 + 160.0);
        assert_eq!(b.current_hourly_rate, 40.0);
        assert_eq!(b.next_rate_tier, RateTier::MaximumRate);
    }

    #[test]
    fn test_after_threshold_sunday_policy() {
        let policy_config = config(20.0).with_sunday_policy(SundayPolicy::AfterThreshold);

        let mut days = mon_to_fri(7.0);
        days.push(WorkDay::new(Weekday::Sun, 8.0));

        let b = allocate(&days, &policy_config, at(Weekday::Sun, 20));
        assert_eq!(b.regular_hours, 40.0);
        assert_eq!(b.sunday_premium_hours, 3.0);
        assert_eq!(b.total_pay, 800.0 + 120.0);
    }

    #[test]
    fn test_pay_identity_and_determinism() {
        let rate = 23.17;
        let days = week(&[
            (Weekday::Mon, 9.13),
            (Weekday::Tue, 11.7),
            (Weekday::Wed, 8.01),
            (Weekday::Thu, 10.33),
            (Weekday::Fri, 6.6),
            (Weekday::Sat, 3.3),
            (Weekday::Sun, 2.45),
        ]);
        let now = at(Weekday::Sun, 21);

        let first = allocate(&days, &config(rate), now);
        let second = allocate(&days, &config(rate), now);
        assert_eq!(first, second);

        let expected = first.regular_hours * rate
            + first.overtime_hours * (rate * 1.5)
            + first.sunday_premium_hours * (rate * 2.0);
        assert_eq!(first.total_pay, expected);
        assert_eq!(first.sunday_premium_hours, 2.45);
        assert!((first.total_hours() - 51.52).abs() < 1e-9);
    }

    #[test]
    fn test_working_flag_uses_detector() {
        let days = vec![WorkDay::new(Weekday::Wed, 4.0).punched(Some("9:00 AM"), None)];
        let b = allocate(&days, &config(20.0), at(Weekday::Wed, 13));
        assert!(b.is_currently_working);

        let b = allocate(&days, &config(20.0), at(Weekday::Thu, 13));
        assert!(!b.is_currently_working);
    }

    #[test]
    fn test_day_pay() {
        let c = config(20.0);
        // 38h before today, 5h today: 2h regular + 3h overtime.
        assert_eq!(day_pay(Weekday::Fri, 5.0, 43.0, &c), 2.0 * 20.0 + 3.0 * 30.0);
        assert_eq!(day_pay(Weekday::Sun, 3.0, 10.0, &c), 120.0);
        assert_eq!(day_pay(Weekday::Mon, 0.0, 0.0, &c), 0.0);
    }
}
