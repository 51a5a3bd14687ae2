use std::cell::RefCell;

use anyhow::Result;

use crate::model::record::DailyRecord;
use crate::repository::traits::RecordStorage;

// Ephemeral storage, mainly for tests and previews. Nothing survives drop.
#[derive(Default)]
pub struct MemoryRecordStorage {
    records: RefCell<Vec<DailyRecord>>,
}

impl MemoryRecordStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DailyRecord>) -> Self {
        MemoryRecordStorage {
            records: RefCell::new(records),
        }
    }
}

impl RecordStorage for MemoryRecordStorage {
    fn load(&self) -> Result<Vec<DailyRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[DailyRecord]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn starts_empty() {
        let storage = MemoryRecordStorage::new();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_contents() {
        let storage = MemoryRecordStorage::with_records(vec![DailyRecord::new(Utc::now())]);

        storage.save(&[]).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }
}
