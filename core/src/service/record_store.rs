use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::model::record::DailyRecord;
use crate::repository::RecordStorage;
use crate::time::is_same_day;

pub struct MoodStore<S: RecordStorage> {
    storage: S,
    records: Vec<DailyRecord>,
    listeners: Vec<Box<dyn Fn(&[DailyRecord])>>,
}

impl<S: RecordStorage> MoodStore<S> {
    // A failed load logs and starts the session with an empty collection
    // instead of surfacing an error.
    pub fn new(storage: S) -> Self {
        let records = match storage.load() {
            Ok(records) => records,
            Err(error) => {
                warn!(error = %error, "Failed to load mood records, starting empty");
                Vec::new()
            }
        };
        MoodStore {
            storage,
            records,
            listeners: Vec::new(),
        }
    }

    // Returns the record covering the same calendar day as `date`, or a
    // fresh zeroed record for that date. Never inserts into the collection.
    pub fn get_record(&self, date: DateTime<Utc>) -> DailyRecord {
        self.records
            .iter()
            .find(|r| is_same_day(r.date, date))
            .cloned()
            .unwrap_or_else(|| DailyRecord::new(date))
    }

    // Replaces the record for the same calendar day, or inserts it.
    // One record per day is the collection invariant.
    pub fn upsert(&mut self, record: DailyRecord) {
        if let Some(pos) = self
            .records
            .iter()
            .position(|r| is_same_day(r.date, record.date))
        {
            self.records[pos] = record;
        } else {
            self.records.push(record);
        }
        self.persist();
        self.notify();
    }

    // Removes the record with the same id. No-op if absent.
    pub fn delete(&mut self, record: &DailyRecord) {
        let initial_len = self.records.len();
        self.records.retain(|r| r.id != record.id);
        if self.records.len() == initial_len {
            return;
        }
        self.persist();
        self.notify();
    }

    // Every record, newest first.
    pub fn list_all(&self) -> Vec<DailyRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn subscribe(&mut self, listener: impl Fn(&[DailyRecord]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&self) {
        match self.storage.save(&self.records) {
            Ok(()) => debug!(count = self.records.len(), "Saved mood records"),
            Err(error) => {
                // In-memory state stays authoritative for the session
                warn!(error = %error, "Failed to save mood records");
            }
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.records);
        }
    }
}
