use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::emotion::EmotionCategory;

// One record per calendar day. The date keeps its time-of-day as entered;
// lookups compare calendar days only (see MoodStore::get_record).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub emotion_percentages: BTreeMap<EmotionCategory, f64>,
    pub notes: String,
    pub is_private: bool,
}

impl DailyRecord {
    pub fn new(date: DateTime<Utc>) -> Self {
        let mut emotion_percentages = BTreeMap::new();
        for emotion in EmotionCategory::ALL {
            emotion_percentages.insert(emotion, 0.0);
        }

        Self {
            id: Uuid::new_v4(),
            date,
            emotion_percentages,
            notes: String::new(),
            is_private: true,
        }
    }

    // Missing keys read as 0 so hand-edited or older data cannot skew the
    // averaging logic. Values are expected to be clamped to 0..=100 by the
    // input surface; the core does not re-clamp.
    pub fn percentage(&self, emotion: EmotionCategory) -> f64 {
        self.emotion_percentages
            .get(&emotion)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set_percentage(&mut self, emotion: EmotionCategory, value: f64) {
        self.emotion_percentages.insert(emotion, value);
    }

    pub fn is_empty(&self) -> bool {
        !EmotionCategory::ALL
            .iter()
            .any(|emotion| self.percentage(*emotion) > 0.0)
    }

    // Highest-percentage category, or None for an all-zero record. Ties
    // resolve to the earliest category in EmotionCategory::ALL.
    pub fn dominant_emotion(&self) -> Option<(EmotionCategory, f64)> {
        let mut dominant: Option<(EmotionCategory, f64)> = None;

        for emotion in EmotionCategory::ALL {
            let value = self.percentage(emotion);
            if value <= 0.0 {
                continue;
            }
            match dominant {
                Some((_, top)) if value <= top => {}
                _ => dominant = Some((emotion, value)),
            }
        }

        dominant
    }
}
