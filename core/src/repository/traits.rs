use crate::model::record::DailyRecord;
use anyhow::Result;

pub trait RecordStorage {
    fn load(&self) -> Result<Vec<DailyRecord>>;
    fn save(&self, records: &[DailyRecord]) -> Result<()>;
}
