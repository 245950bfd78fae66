pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}h", hours)
}

pub fn format_rate(rate: f64) -> String {
    format!("{}/hr", format_currency(rate))
}
