//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_DATA_DIR;
use super::types::Config;
use crate::error::{Result, TermfolioError};

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_DATA_DIR).as_ref()).join("config.json")
}

/// Parse a config file, reporting why it couldn't be used.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| TermfolioError::StoreRead {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content)
        .map_err(|e| TermfolioError::Config(format!("{}: {}", path.display(), e)))
}

/// Load configuration from `path`.
///
/// Returns Config::default() if the file is missing or invalid.
#[instrument(name = "load_config")]
pub fn load_config(path: &Path) -> Config {
    let (config, error) = load_config_deferred(path);
    if let Some(e) = error {
        warn_load_failed(&e);
    }
    config
}

/// Like [`load_config`], but hands back the failure instead of logging it.
///
/// Startup reads the config before the subscriber exists (the log directory
/// comes from the config), so the caller reports the error once logging is up.
pub fn load_config_deferred(path: &Path) -> (Config, Option<TermfolioError>) {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return (Config::default(), None);
    }

    match read_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            (config, None)
        }
        Err(e) => (Config::default(), Some(e)),
    }
}

/// Log a config failure that fell back to defaults.
pub fn warn_load_failed(error: &TermfolioError) {
    warn!(
        error = %error,
        severity = ?error.severity(),
        user_message = %error.user_message(),
        "Failed to load config, using defaults"
    );
}
