pub mod reflection;

// Re-export
pub use reflection::ReflectionUseCase;
