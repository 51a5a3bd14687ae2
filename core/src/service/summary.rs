use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::emotion::{EmotionCategory, Sentiment};
use crate::model::record::DailyRecord;
use crate::model::summary::MonthlySummary;
use crate::repository::RecordStorage;
use crate::service::record_store::MoodStore;
use crate::time::{is_same_month, month_start};

// Averages within this distance of the maximum count as tied for the top.
const TIE_EPSILON: f64 = 0.0001;

const NO_DATA_MESSAGE: &str = "No mood recorded this month.";
const MIXED_MESSAGE: &str = "A mixed month—stay mindful and take care.";

pub struct SummaryEngine<'a, S: RecordStorage> {
    store: &'a MoodStore<S>,
}

impl<'a, S: RecordStorage> SummaryEngine<'a, S> {
    pub fn new(store: &'a MoodStore<S>) -> Self {
        Self { store }
    }

    // Per-category averages over the records of `month`'s calendar month.
    // Every category is present; an empty month is all zeros.
    pub fn monthly_averages(&self, month: NaiveDate) -> BTreeMap<EmotionCategory, f64> {
        averages_for_month(self.store.records(), month)
    }

    pub fn summary_message(&self, month: NaiveDate) -> String {
        compose_message(&self.monthly_averages(month))
    }

    pub fn monthly_summary(&self, month: NaiveDate) -> MonthlySummary {
        let emotion_averages = self.monthly_averages(month);
        let message = compose_message(&emotion_averages);
        MonthlySummary {
            month: month_start(month),
            emotion_averages,
            message,
        }
    }
}

// Standalone functions for pure logic

pub fn averages_for_month(
    records: &[DailyRecord],
    month: NaiveDate,
) -> BTreeMap<EmotionCategory, f64> {
    let month_records: Vec<&DailyRecord> = records
        .iter()
        .filter(|r| is_same_month(r.date, month))
        .collect();

    let mut averages = BTreeMap::new();
    for emotion in EmotionCategory::ALL {
        let average = if month_records.is_empty() {
            0.0
        } else {
            let total: f64 = month_records.iter().map(|r| r.percentage(emotion)).sum();
            total / month_records.len() as f64
        };
        averages.insert(emotion, average);
    }
    averages
}

pub fn compose_message(averages: &BTreeMap<EmotionCategory, f64>) -> String {
    if !averages.values().any(|&value| value > 0.0) {
        return NO_DATA_MESSAGE.to_string();
    }

    let max_value = averages.values().fold(0.0_f64, |max, &value| max.max(value));
    let top: Vec<EmotionCategory> = EmotionCategory::ALL
        .into_iter()
        .filter(|emotion| {
            let value = averages.get(emotion).copied().unwrap_or(0.0);
            value + TIE_EPSILON >= max_value && value > 0.0
        })
        .collect();

    if let [single] = top.as_slice() {
        return single_message(*single).to_string();
    }
    combined_message(&top)
}

fn single_message(emotion: EmotionCategory) -> &'static str {
    match emotion {
        EmotionCategory::Happy => "A joyful month! Keep nurturing what brings you happiness.",
        EmotionCategory::Calm => "A calm and peaceful month. Great balance—keep it up.",
        EmotionCategory::Excited => "An exciting month—ride the momentum and channel it well!",
        EmotionCategory::Sad => {
            "Some sadness surfaced this month. Be gentle with yourself and seek support when needed."
        }
        EmotionCategory::Angry => {
            "Tough moments showed up. Remember to pause, breathe, and express needs kindly."
        }
        EmotionCategory::Fear => {
            "Anxieties were present. Ground yourself—small steps and self-compassion help."
        }
        EmotionCategory::Disgust => {
            "You faced unpleasant feelings. Protect your boundaries and practice self-care."
        }
        EmotionCategory::Surprised => "A month full of surprises—stay curious and flexible.",
    }
}

fn combined_message(top: &[EmotionCategory]) -> String {
    let of_sentiment = |sentiment: Sentiment| -> Vec<EmotionCategory> {
        top.iter()
            .copied()
            .filter(|e| e.sentiment() == sentiment)
            .collect()
    };
    let positives = of_sentiment(Sentiment::Positive);
    let negatives = of_sentiment(Sentiment::Negative);
    let neutrals = of_sentiment(Sentiment::Neutral);

    let mut parts = Vec::new();
    if !positives.is_empty() {
        parts.push(format!(
            "{} stand out—awesome! Keep the good vibes going.",
            join_names(&positives)
        ));
    }
    if !negatives.is_empty() {
        parts.push(format!(
            "{} were prominent. Take care, slow down, and reach out if needed.",
            join_names(&negatives)
        ));
    }
    if !neutrals.is_empty() {
        parts.push(format!(
            "{} shaped the month—stay open and adaptable.",
            join_names(&neutrals)
        ));
    }

    if parts.is_empty() {
        return MIXED_MESSAGE.to_string();
    }
    parts.join(" ")
}

fn join_names(emotions: &[EmotionCategory]) -> String {
    let names: Vec<&str> = emotions.iter().map(|e| e.display_name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
