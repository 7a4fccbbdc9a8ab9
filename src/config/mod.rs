//! Configuration module - application settings
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_DOUBLE_PRESS_MS, DEFAULT_MAX_SUBMISSIONS, DEFAULT_MIN_FILL_SECONDS};

pub use types::{Config, KeymapConfig, PaletteConfig, SpamConfig};

pub use loader::{
    default_config_path, load_config, load_config_deferred, read_config, warn_load_failed,
};

#[cfg(test)]
pub use defaults::{DEFAULT_REMEMBER_QUERY, DEFAULT_WINDOW_MINUTES};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
