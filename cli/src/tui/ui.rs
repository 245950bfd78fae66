use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use paytrack_core::{format_currency, format_hours, format_rate, LiveTick, TimesheetRepository};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    good: Color,
    warn: Color,
    bad: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    good: Color::Green,
    warn: Color::Yellow,
    bad: Color::Red,
};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
}

fn label_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(THEME.muted)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn draw<R: TimesheetRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Live total
            Constraint::Min(8),    // Breakdown + goals
            Constraint::Length(3), // Daily goal gauge
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("PAYTRACK LIVE")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_live_total(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    draw_breakdown(f, app, content_chunks[0]);
    draw_goals(f, app, content_chunks[1]);
    draw_daily_gauge(f, app, main_chunks[3]);

    let help = match &app.status_message {
        Some(msg) => format!("{} | r: Reload | q: Quit", msg),
        None => "r: Reload | q: Quit".to_string(),
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_live_total<R: TimesheetRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let total = Span::styled(
        format_currency(app.last_tick.total()),
        Style::default().fg(THEME.good).add_modifier(Modifier::BOLD),
    );

    let detail = match &app.last_tick {
        LiveTick::Accruing(earnings) => Line::from(vec![
            Span::styled("● Clocked in  ", Style::default().fg(THEME.good)),
            Span::styled(
                format!("+{}/min", format_currency(earnings.earnings_per_minute)),
                Style::default().fg(THEME.text),
            ),
        ]),
        LiveTick::Frozen { .. } => {
            Line::from(Span::styled("○ Not working", Style::default().fg(THEME.muted)))
        }
    };

    let widget = Paragraph::new(vec![Line::from(total), detail])
        .alignment(Alignment::Center)
        .block(panel(" Earned This Week "));
    f.render_widget(widget, area);
}

fn draw_breakdown<R: TimesheetRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let b = app.live.breakdown();
    let mut lines = vec![
        label_line(
            "Regular:  ",
            format!("{} = {}", format_hours(b.regular_hours), format_currency(b.regular_pay)),
            THEME.text,
        ),
        label_line(
            "Overtime: ",
            format!("{} = {}", format_hours(b.overtime_hours), format_currency(b.overtime_pay)),
            THEME.text,
        ),
        label_line(
            "Sunday:   ",
            format!(
                "{} = {}",
                format_hours(b.sunday_premium_hours),
                format_currency(b.sunday_premium_pay)
            ),
            THEME.text,
        ),
        Line::from(""),
        label_line("Rate:     ", format_rate(b.current_hourly_rate), THEME.primary),
        label_line("Next:     ", b.next_rate_tier.to_string(), THEME.text),
    ];
    if b.hours_until_overtime > 0.0 {
        lines.push(label_line(
            "Until OT: ",
            format_hours(b.hours_until_overtime),
            THEME.text,
        ));
    }

    f.render_widget(Paragraph::new(lines).block(panel(" Breakdown ")), area);
}

fn draw_goals<R: TimesheetRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let dashboard = &app.dashboard;
    let standing_color = if dashboard.standing.is_behind() { THEME.bad } else { THEME.good };
    let projection = match &app.last_tick {
        LiveTick::Accruing(earnings) => &earnings.projection,
        LiveTick::Frozen { .. } => &dashboard.projection,
    };

    let mut lines = vec![
        label_line("Week:      ", dashboard.standing.to_string(), standing_color),
        label_line(
            "Remaining: ",
            format!("{} goal hours", format_hours(projection.remaining_goal_hours)),
            THEME.text,
        ),
        label_line(
            "Projected: ",
            format_currency(projection.projected_total_pay),
            THEME.primary,
        ),
    ];

    if let LiveTick::Accruing(earnings) = &app.last_tick {
        let color = if earnings.daily_standing.is_behind() { THEME.warn } else { THEME.good };
        lines.push(Line::from(""));
        lines.push(label_line("Today:     ", earnings.daily_standing.daily_label(), color));
        if earnings.potential_loss > 0.0 {
            lines.push(label_line(
                "At stake:  ",
                format!("{} if you leave now", format_currency(earnings.potential_loss)),
                THEME.bad,
            ));
        }
    }

    f.render_widget(Paragraph::new(lines).block(panel(" Goals ")), area);
}

fn draw_daily_gauge<R: TimesheetRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (hours, goal, earned) = match &app.last_tick {
        LiveTick::Accruing(earnings) => {
            (earnings.today_hours, earnings.today_goal, earnings.today_earnings)
        }
        LiveTick::Frozen { .. } => {
            let dashboard = &app.dashboard;
            (dashboard.today_hours, dashboard.today_goal, dashboard.today_pay)
        }
    };
    let ratio = if goal > 0.0 { (hours / goal).clamp(0.0, 1.0) } else { 1.0 };

    let gauge = Gauge::default()
        .block(panel(" Today's Goal "))
        .gauge_style(Style::default().fg(if ratio >= 1.0 { THEME.good } else { THEME.primary }))
        .ratio(ratio)
        .label(format!(
            "{} / {} ({} today)",
            format_hours(hours),
            format_hours(goal),
            format_currency(earned)
        ));
    f.render_widget(gauge, area);
}
