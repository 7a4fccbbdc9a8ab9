//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Default data directory (tilde-expanded at load time)
pub const DEFAULT_DATA_DIR: &str = "~/.termfolio";

/// Default palette settings
pub const DEFAULT_REMEMBER_QUERY: bool = true;

/// Window in which a second `g` counts as `gg` (milliseconds)
pub const DEFAULT_DOUBLE_PRESS_MS: u64 = 500;

/// Default spam filter settings
pub const DEFAULT_MAX_SUBMISSIONS: usize = 3;
pub const DEFAULT_WINDOW_MINUTES: u64 = 60;
pub const DEFAULT_MIN_FILL_SECONDS: u64 = 3;
