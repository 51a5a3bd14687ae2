use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde_json;

use crate::model::record::DailyRecord;
use crate::repository::traits::RecordStorage;

const STORAGE_FILE_NAME: &str = "daily_records.json";
const APP_DIR_NAME: &str = ".moodlog";

#[derive(Clone)]
pub struct FileRecordStorage {
    file_path: PathBuf,
}

impl FileRecordStorage {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(APP_DIR_NAME)
            }
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create data directory {}", path.display()))?;
        path.push(STORAGE_FILE_NAME);

        // Initialize with an empty JSON array so load never sees a missing file
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<DailyRecord>::new())?;
            writer.flush()?;
        }

        Ok(FileRecordStorage { file_path: path })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl RecordStorage for FileRecordStorage {
    fn load(&self) -> Result<Vec<DailyRecord>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(records)
    }

    fn save(&self, records: &[DailyRecord]) -> Result<()> {
        // Write to a sibling temp file, then rename over the slot so the
        // stored collection is never observable half-written.
        let tmp_path = self.file_path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)
                .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.file_path)
            .with_context(|| format!("Failed to replace {}", self.file_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn new_initializes_empty_collection() {
        let dir = tempdir().unwrap();
        let storage = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(storage.file_path().exists());
        let records = storage.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn save_then_load_returns_same_records() {
        let dir = tempdir().unwrap();
        let storage = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();

        let mut record = DailyRecord::new(Utc::now());
        record.set_percentage(crate::model::emotion::EmotionCategory::Happy, 72.5);
        record.notes = "long walk".to_string();
        storage.save(std::slice::from_ref(&record)).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let storage = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();

        storage.save(&[DailyRecord::new(Utc::now())]).unwrap();

        let tmp_path = storage.file_path().with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn load_fails_on_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();

        fs::write(storage.file_path(), "{ not json").unwrap();
        assert!(storage.load().is_err());
    }

    #[test]
    fn new_keeps_existing_data() {
        let dir = tempdir().unwrap();
        let storage = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();
        storage.save(&[DailyRecord::new(Utc::now())]).unwrap();

        // Reopening the same directory must not re-initialize the file
        let reopened = FileRecordStorage::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.load().unwrap().len(), 1);
    }
}
