use serde::{Deserialize, Serialize};

// Stored and serialized by name ("happy", "sad", ...) rather than by ordinal,
// so the set can be reordered or extended without breaking persisted data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fear,
    Disgust,
    Calm,
    Excited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl EmotionCategory {
    // Declaration order. Tie-breaking and display ordering follow this array,
    // never map iteration order.
    pub const ALL: [EmotionCategory; 8] = [
        EmotionCategory::Happy,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Surprised,
        EmotionCategory::Fear,
        EmotionCategory::Disgust,
        EmotionCategory::Calm,
        EmotionCategory::Excited,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "Happy",
            EmotionCategory::Sad => "Sad",
            EmotionCategory::Angry => "Angry",
            EmotionCategory::Surprised => "Surprised",
            EmotionCategory::Fear => "Fear",
            EmotionCategory::Disgust => "Disgust",
            EmotionCategory::Calm => "Calm",
            EmotionCategory::Excited => "Excited",
        }
    }

    // Presentation hint only. The core never interprets these.
    pub fn color_name(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "yellow",
            EmotionCategory::Sad => "blue",
            EmotionCategory::Angry => "red",
            EmotionCategory::Surprised => "orange",
            EmotionCategory::Fear => "purple",
            EmotionCategory::Disgust => "green",
            EmotionCategory::Calm => "teal",
            EmotionCategory::Excited => "pink",
        }
    }

    pub fn sentiment(&self) -> Sentiment {
        match self {
            EmotionCategory::Happy | EmotionCategory::Calm | EmotionCategory::Excited => {
                Sentiment::Positive
            }
            EmotionCategory::Sad
            | EmotionCategory::Angry
            | EmotionCategory::Fear
            | EmotionCategory::Disgust => Sentiment::Negative,
            EmotionCategory::Surprised => Sentiment::Neutral,
        }
    }
}
