use chrono::{DateTime, Utc};

use crate::repository::RecordStorage;
use crate::service::dto::ReflectionEntry;
use crate::service::record_store::MoodStore;

pub struct ReflectionUseCase<'a, S: RecordStorage> {
    store: &'a MoodStore<S>,
}

impl<'a, S: RecordStorage> ReflectionUseCase<'a, S> {
    pub fn new(store: &'a MoodStore<S>) -> Self {
        Self { store }
    }

    // One entry per recorded day, newest first.
    pub fn recent_entries(&self) -> Vec<ReflectionEntry> {
        self.store
            .list_all()
            .iter()
            .map(ReflectionEntry::from_record)
            .collect()
    }

    // The entry for `date`'s calendar day, fresh if nothing is recorded yet.
    pub fn entry_for(&self, date: DateTime<Utc>) -> ReflectionEntry {
        ReflectionEntry::from_record(&self.store.get_record(date))
    }
}
