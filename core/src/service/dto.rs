use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::emotion::EmotionCategory;
use crate::model::record::DailyRecord;
use crate::time::date_label;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DominantEmotion {
    pub emotion: EmotionCategory,
    pub percentage: f64,
    pub label: String, // "Happy: 80%"
}

// Flattened row for the reflection list in the UI
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReflectionEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub date_label: String, // "Mar 5, 2025"
    pub dominant: Option<DominantEmotion>,
    pub notes: String,
    pub is_private: bool,
}

impl ReflectionEntry {
    pub fn from_record(record: &DailyRecord) -> Self {
        let dominant = record
            .dominant_emotion()
            .map(|(emotion, value)| DominantEmotion {
                emotion,
                percentage: value,
                label: format!("{}: {}%", emotion.display_name(), value as i64),
            });

        Self {
            id: record.id,
            date: record.date,
            date_label: date_label(record.date),
            dominant,
            notes: record.notes.clone(),
            is_private: record.is_private,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dominant_label_truncates_the_percentage() {
        let mut record =
            DailyRecord::new(Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap());
        record.set_percentage(EmotionCategory::Happy, 80.7);

        let entry = ReflectionEntry::from_record(&record);
        let dominant = entry.dominant.unwrap();
        assert_eq!(dominant.emotion, EmotionCategory::Happy);
        assert_eq!(dominant.label, "Happy: 80%");
    }

    #[test]
    fn empty_record_has_no_dominant_emotion() {
        let record = DailyRecord::new(Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap());

        let entry = ReflectionEntry::from_record(&record);
        assert!(entry.dominant.is_none());
        assert_eq!(entry.date_label, "Mar 5, 2025");
        assert!(entry.is_private);
    }
}
