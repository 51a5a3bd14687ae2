use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::emotion::EmotionCategory;

// Derived per-month aggregate. Computed on demand by the summary engine,
// never persisted by the core.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: NaiveDate,
    pub emotion_averages: BTreeMap<EmotionCategory, f64>,
    pub message: String,
}

impl MonthlySummary {
    pub fn average(&self, emotion: EmotionCategory) -> f64 {
        self.emotion_averages
            .get(&emotion)
            .copied()
            .unwrap_or(0.0)
    }
}
