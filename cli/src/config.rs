use anyhow::{Context, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use paytrack_core::model::config::{DEFAULT_WEEKDAY_GOAL, DEFAULT_WEEKEND_GOAL};
use paytrack_core::{DailyGoals, PayConfiguration, SundayPolicy};

const DEFAULT_BASE_HOURLY_RATE: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base pay in currency per hour
    #[serde(default = "default_base_hourly_rate")]
    pub base_hourly_rate: f64,

    /// How Sunday hours are billed
    #[serde(default)]
    pub sunday_policy: SundayPolicy,

    /// Where imported timesheets are kept (defaults to ~/.paytrack)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Daily hour goals
    #[serde(default)]
    pub goals: GoalSettings,
}

fn default_base_hourly_rate() -> f64 {
    DEFAULT_BASE_HOURLY_RATE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSettings {
    #[serde(default = "default_weekday_goal")]
    pub monday: f64,
    #[serde(default = "default_weekday_goal")]
    pub tuesday: f64,
    #[serde(default = "default_weekday_goal")]
    pub wednesday: f64,
    #[serde(default = "default_weekday_goal")]
    pub thursday: f64,
    #[serde(default = "default_weekday_goal")]
    pub friday: f64,
    #[serde(default = "default_weekend_goal")]
    pub saturday: f64,
    #[serde(default = "default_weekend_goal")]
    pub sunday: f64,
}

fn default_weekday_goal() -> f64 {
    DEFAULT_WEEKDAY_GOAL
}

fn default_weekend_goal() -> f64 {
    DEFAULT_WEEKEND_GOAL
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            monday: default_weekday_goal(),
            tuesday: default_weekday_goal(),
            wednesday: default_weekday_goal(),
            thursday: default_weekday_goal(),
            friday: default_weekday_goal(),
            saturday: default_weekend_goal(),
            sunday: default_weekend_goal(),
        }
    }
}

impl GoalSettings {
    fn to_daily_goals(&self) -> DailyGoals {
        let mut goals = DailyGoals::default();
        goals.set(Weekday::Mon, self.monday);
        goals.set(Weekday::Tue, self.tuesday);
        goals.set(Weekday::Wed, self.wednesday);
        goals.set(Weekday::Thu, self.thursday);
        goals.set(Weekday::Fri, self.friday);
        goals.set(Weekday::Sat, self.saturday);
        goals.set(Weekday::Sun, self.sunday);
        goals
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_hourly_rate: default_base_hourly_rate(),
            sunday_policy: SundayPolicy::default(),
            data_dir: None,
            goals: GoalSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(p) = path {
            return Self::read(p);
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join("paytrack/config.toml")),
            dirs::home_dir().map(|p| p.join(".paytrack.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read(path);
            }
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// The only way settings reach the pay core; rejects a non-positive rate
    /// or negative goals.
    pub fn to_pay_configuration(&self) -> Result<PayConfiguration> {
        let config = PayConfiguration::new(self.base_hourly_rate, self.goals.to_daily_goals())?;
        Ok(config.with_sunday_policy(self.sunday_policy))
    }
}
