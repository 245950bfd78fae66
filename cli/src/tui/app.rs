use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDateTime};
use tracing::debug;

use paytrack_core::{Dashboard, LiveAccrual, LiveTick, PayConfiguration, TimesheetRepository};

pub struct App<R: TimesheetRepository> {
    repo: R,
    config: PayConfiguration,
    pub live: LiveAccrual,
    pub dashboard: Dashboard,
    pub last_tick: LiveTick,
    pub status_message: Option<String>,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<R: TimesheetRepository> App<R> {
    pub fn new(repo: R, config: PayConfiguration) -> Result<Self> {
        let snapshot = repo
            .load()?
            .ok_or_else(|| {
                anyhow!("No timesheet imported yet. Run `paytrack import <file>` first.")
            })?;

        let now = now();
        let work_days = snapshot.work_days();
        let mut dashboard = Dashboard::build(&work_days, &config, now);
        dashboard.fetched_at = Some(snapshot.fetched_at);
        let mut live = LiveAccrual::new(work_days, config, now);
        let last_tick = live.tick(now);

        Ok(Self {
            repo,
            config,
            live,
            dashboard,
            last_tick,
            status_message: None,
        })
    }

    pub fn on_tick(&mut self) {
        self.last_tick = self.live.tick(now());
    }

    /// Re-reads the stored timesheet, e.g. after an import from another shell.
    pub fn reload(&mut self) {
        match self.repo.load() {
            Ok(Some(snapshot)) => {
                let now = now();
                let work_days = snapshot.work_days();
                self.dashboard = Dashboard::build(&work_days, &self.config, now);
                self.dashboard.fetched_at = Some(snapshot.fetched_at);
                self.live.replace(work_days, self.config, now);
                self.last_tick = self.live.tick(now);
                self.status_message = Some("Timesheet reloaded".to_string());
                debug!("Reloaded timesheet fetched at {}", snapshot.fetched_at);
            }
            Ok(None) => self.status_message = Some("No timesheet imported".to_string()),
            Err(e) => self.status_message = Some(format!("Reload failed: {}", e)),
        }
    }
}
