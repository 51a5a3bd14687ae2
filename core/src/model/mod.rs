pub mod emotion;
pub mod record;
pub mod summary;

// Re-export
pub use emotion::{EmotionCategory, Sentiment};
pub use record::DailyRecord;
pub use summary::MonthlySummary;
