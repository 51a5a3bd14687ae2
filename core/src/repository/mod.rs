pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileRecordStorage;
pub use memory::MemoryRecordStorage;
pub use traits::RecordStorage;
