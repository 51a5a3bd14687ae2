pub mod model;
pub mod repository;
pub mod settings;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::emotion::{EmotionCategory, Sentiment};
pub use model::record::DailyRecord;
pub use model::summary::MonthlySummary;
pub use repository::{FileRecordStorage, MemoryRecordStorage, RecordStorage};
pub use settings::UserSettings;
pub use time::{date_label, month_label, month_start, recent_months};
pub use service::record_store::MoodStore;
pub use service::summary::{averages_for_month, compose_message, SummaryEngine};
pub use service::dto::{DominantEmotion, ReflectionEntry};
pub use usecase::ReflectionUseCase;
