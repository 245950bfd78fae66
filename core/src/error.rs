use chrono::Weekday;

/// Errors raised inside the pay core.
///
/// Services never let these escape: a `Parse` or `MissingData` error is
/// logged and the affected day reads as zero. `Configuration` errors are
/// raised by `PayConfiguration::new` before any calculation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayError {
    #[error("Could not parse '{input}': {reason}")]
    Parse { input: String, reason: String },
    #[error("No timesheet record for {0}")]
    MissingData(Weekday),
    #[error("Invalid pay configuration: {0}")]
    Configuration(String),
}

impl PayError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        PayError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
