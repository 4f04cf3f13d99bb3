//! Configuration management for omod-scout

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, DEFAULT_GREETING, Settings};
