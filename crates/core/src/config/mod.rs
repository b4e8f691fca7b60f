//! Configuration management for shortpath

mod settings;
pub mod validation;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_ELLIPSIS, Platform};
pub use validation::{ConfigValidator, MainConfigValidator};
