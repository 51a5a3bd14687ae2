pub mod dto;
pub mod record_store;
pub mod summary;

// Re-export
pub use dto::{DominantEmotion, ReflectionEntry};
pub use record_store::MoodStore;
pub use summary::SummaryEngine;
