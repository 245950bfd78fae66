mod config;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paytrack_core::{
    parse_raw_timesheet, Dashboard, DashboardUseCase, FileTimesheetRepository, PayConfiguration,
    TimesheetRepository, TimesheetSnapshot,
};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "paytrack")]
#[command(
    about = "Weekly pay breakdown and live earnings for timesheet punches",
    long_about = None
)]
struct Cli {
    /// Path to a config file (default: ~/.config/paytrack/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the base hourly rate from the config file
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Import a scraped timesheet (JSON records or extraction lines)
    Import {
        /// File holding the scraped payload
        file: PathBuf,
    },
    /// Show the weekly pay breakdown
    Breakdown {
        /// Print the full dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show progress against daily hour goals
    Goals,
    /// Show whether you are clocked in right now
    Status,
    /// Open the live earnings view
    Live,
}

fn setup_logging(debug: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if debug {
                EnvFilter::new("paytrack=debug,paytrack_core=debug")
            } else {
                EnvFilter::new("paytrack=info,paytrack_core=info")
            }
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_dashboard(repo: &FileTimesheetRepository, config: &PayConfiguration) -> Result<Dashboard> {
    let usecase = DashboardUseCase::new(repo, config);
    match usecase.load(Local::now().naive_local())? {
        Some(dashboard) => Ok(dashboard),
        None => bail!("No timesheet imported yet. Run `paytrack import <file>` first."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let live = matches!(cli.command, None | Some(Commands::Live));
    // Log lines would tear the alternate screen
    setup_logging(cli.debug, live);

    let mut settings = Settings::load(cli.config.as_ref())?;
    if let Some(rate) = cli.rate {
        debug!("Overriding base rate {} with {}", settings.base_hourly_rate, rate);
        settings.base_hourly_rate = rate;
    }
    let config = settings.to_pay_configuration()?;
    let repo = FileTimesheetRepository::new(settings.data_dir.clone())?;

    match cli.command {
        Some(Commands::Import { file }) => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let records = parse_raw_timesheet(&raw)
                .with_context(|| format!("Failed to parse timesheet in {}", file.display()))?;
            let count = records.len();
            repo.save(&TimesheetSnapshot::new(records))?;
            info!("Saved timesheet to {}", repo.file_path().display());
            println!("Imported {} punch records.", count);
        }
        Some(Commands::Breakdown { json }) => {
            let dashboard = load_dashboard(&repo, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                report::show_breakdown(&dashboard, &config);
            }
        }
        Some(Commands::Goals) => {
            let dashboard = load_dashboard(&repo, &config)?;
            report::show_goals(&dashboard, &config);
        }
        Some(Commands::Status) => {
            let dashboard = load_dashboard(&repo, &config)?;
            report::show_status(&dashboard);
        }
        Some(Commands::Live) | None => {
            tui::run(repo, config)?;
        }
    }

    Ok(())
}
