use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::timesheet::TimesheetSnapshot;
use crate::repository::traits::TimesheetRepository;

const TIMESHEET_FILE_NAME: &str = "timesheet.json";

/// Keeps the most recent scrape as pretty-printed JSON.
#[derive(Clone)]
pub struct FileTimesheetRepository {
    file_path: PathBuf,
}

impl FileTimesheetRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {:?}", dir))?;

        Ok(FileTimesheetRepository {
            file_path: dir.join(TIMESHEET_FILE_NAME),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".paytrack"))
}

impl TimesheetRepository for FileTimesheetRepository {
    fn load(&self) -> Result<Option<TimesheetSnapshot>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse timesheet file: {:?}", self.file_path))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &TimesheetSnapshot) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        debug!("Saved {} timesheet records to {:?}", snapshot.records.len(), self.file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timesheet::PunchRecord;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileTimesheetRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = FileTimesheetRepository::new(Some(dir.path().join("nested"))).unwrap();

        let first = TimesheetSnapshot::new(vec![PunchRecord {
            day: "Monday".to_string(),
            total_hours: Some("8.0h".to_string()),
            ..Default::default()
        }]);
        repo.save(&first).unwrap();

        let second = TimesheetSnapshot::new(vec![PunchRecord {
            day: "Tuesday".to_string(),
            punch_in: Some("9:00 AM".to_string()),
            ..Default::default()
        }]);
        repo.save(&second).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded, second);
        assert!(repo.file_path().ends_with("timesheet.json"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let repo = FileTimesheetRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.file_path(), "{ not json").unwrap();
        assert!(repo.load().is_err());
    }
}
