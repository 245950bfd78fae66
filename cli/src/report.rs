use chrono::Local;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use paytrack_core::{
    format_currency, format_hours, format_rate, Dashboard, GoalStanding, PayBreakdown,
    PayConfiguration,
};

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Bucket")]
    bucket: &'static str,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Pay")]
    pay: String,
}

#[derive(Tabled)]
struct DayReportRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "In")]
    punch_in: String,
    #[tabled(rename = "Out")]
    punch_out: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "+/-")]
    discrepancy: String,
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    println!("{}", table);
}

fn imported_at(dashboard: &Dashboard) -> String {
    dashboard
        .fetched_at
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn show_breakdown(dashboard: &Dashboard, config: &PayConfiguration) {
    let b = &dashboard.breakdown;

    println!(
        "\n\x1b[1;36mWeekly pay\x1b[0m (imported {}, base {})",
        imported_at(dashboard),
        format_rate(config.base_hourly_rate())
    );

    print_table(vec![
        BucketRow {
            bucket: "Regular",
            hours: format_hours(b.regular_hours),
            rate: format_rate(config.base_hourly_rate()),
            pay: format_currency(b.regular_pay),
        },
        BucketRow {
            bucket: "Overtime",
            hours: format_hours(b.overtime_hours),
            rate: format_rate(config.overtime_rate()),
            pay: format_currency(b.overtime_pay),
        },
        BucketRow {
            bucket: "Sunday premium",
            hours: format_hours(b.sunday_premium_hours),
            rate: format_rate(config.sunday_premium_rate()),
            pay: format_currency(b.sunday_premium_pay),
        },
        BucketRow {
            bucket: "Total",
            hours: format_hours(b.total_hours()),
            rate: "-".to_string(),
            pay: format_currency(b.total_pay),
        },
    ]);

    print_status_lines(b);
}

fn print_status_lines(b: &PayBreakdown) {
    println!("Current rate:  {}", format_rate(b.current_hourly_rate));
    println!("Next tier:     {}", b.next_rate_tier);
    if b.is_currently_working {
        println!("Status:        \x1b[32mclocked in\x1b[0m");
    } else {
        println!("Status:        not working");
    }
}

pub fn show_goals(dashboard: &Dashboard, config: &PayConfiguration) {
    println!(
        "\n\x1b[1;36mGoals\x1b[0m (today: {}, weekly target {})",
        dashboard.today,
        format_hours(config.daily_goals().weekly_total())
    );

    let rows = dashboard
        .days
        .iter()
        .map(|row| DayReportRow {
            day: row.day.to_string(),
            punch_in: row.punch_in.clone().unwrap_or_else(|| "-".to_string()),
            punch_out: row.punch_out.clone().unwrap_or_else(|| "-".to_string()),
            hours: format_hours(row.hours),
            goal: format_hours(row.goal),
            discrepancy: row
                .discrepancy
                .map(|d| GoalStanding::from_discrepancy(d).daily_label())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    print_table::<DayReportRow>(rows);

    let standing = dashboard.standing;
    if standing.is_behind() {
        println!("Week so far:   \x1b[31m{}\x1b[0m", standing);
    } else {
        println!("Week so far:   \x1b[32m{}\x1b[0m", standing);
    }
    println!(
        "Today:         {} of {} ({})",
        format_hours(dashboard.today_hours),
        format_hours(dashboard.today_goal),
        format_currency(dashboard.today_pay)
    );

    let projection = &dashboard.projection;
    println!(
        "Projected:     {} if remaining goals ({}) are met",
        format_currency(projection.projected_total_pay),
        format_hours(projection.remaining_goal_hours)
    );
    println!(
        "Overtime:      {} = {}",
        format_hours(projection.projected_overtime_hours),
        format_currency(projection.projected_overtime_pay)
    );
}

pub fn show_status(dashboard: &Dashboard) {
    print_status_lines(&dashboard.breakdown);
    println!("Hours to OT:   {}", format_hours(dashboard.breakdown.hours_until_overtime));
}
