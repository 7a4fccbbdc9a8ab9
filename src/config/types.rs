//! Configuration type definitions
//!
//! This module contains all the struct definitions for configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::*;

// ============================================
// PALETTE CONFIG
// ============================================

/// Command palette behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Restore the last non-empty query when the palette opens (default: true)
    #[serde(default = "default_remember_query")]
    pub remember_query: bool,
}

fn default_remember_query() -> bool {
    DEFAULT_REMEMBER_QUERY
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            remember_query: DEFAULT_REMEMBER_QUERY,
        }
    }
}

// ============================================
// KEYMAP CONFIG
// ============================================

/// Key dispatcher timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeymapConfig {
    /// Max gap between the two presses of `gg` (default: 500)
    #[serde(default = "default_double_press_ms")]
    pub double_press_ms: u64,
}

fn default_double_press_ms() -> u64 {
    DEFAULT_DOUBLE_PRESS_MS
}

impl Default for KeymapConfig {
    fn default() -> Self {
        KeymapConfig {
            double_press_ms: DEFAULT_DOUBLE_PRESS_MS,
        }
    }
}

impl KeymapConfig {
    pub fn double_press_window(&self) -> Duration {
        Duration::from_millis(self.double_press_ms)
    }
}

// ============================================
// SPAM CONFIG
// ============================================

/// Contact form spam filter thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpamConfig {
    /// Submissions allowed per window (default: 3)
    #[serde(default = "default_max_submissions")]
    pub max_submissions: usize,
    /// Rate limit window in minutes (default: 60)
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u64,
    /// Forms completed faster than this are rejected (default: 3)
    #[serde(default = "default_min_fill_seconds")]
    pub min_fill_seconds: u64,
    /// Additional phrases appended to the built-in keyword list
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_max_submissions() -> usize {
    DEFAULT_MAX_SUBMISSIONS
}
fn default_window_minutes() -> u64 {
    DEFAULT_WINDOW_MINUTES
}
fn default_min_fill_seconds() -> u64 {
    DEFAULT_MIN_FILL_SECONDS
}

impl Default for SpamConfig {
    fn default() -> Self {
        SpamConfig {
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
            window_minutes: DEFAULT_WINDOW_MINUTES,
            min_fill_seconds: DEFAULT_MIN_FILL_SECONDS,
            extra_keywords: Vec::new(),
        }
    }
}

impl SpamConfig {
    /// Rate limit window; values past chrono's range clamp to the maximum.
    pub fn window(&self) -> chrono::Duration {
        i64::try_from(self.window_minutes)
            .ok()
            .and_then(chrono::Duration::try_minutes)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Minimum time on the form; values past chrono's range clamp to the maximum.
    pub fn min_fill_time(&self) -> chrono::Duration {
        i64::try_from(self.min_fill_seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

// ============================================
// MAIN CONFIG
// ============================================

/// Top-level configuration, read from ~/.termfolio/config.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where the remembered query, submission log and logs live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub spam: SpamConfig,
}

impl Config {
    /// Returns the tilde-expanded data directory, or ~/.termfolio if not configured
    pub fn data_dir(&self) -> PathBuf {
        let raw = self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR);
        PathBuf::from(shellexpand::tilde(raw).as_ref())
    }

    /// File holding the remembered palette query
    pub fn query_path(&self) -> PathBuf {
        self.data_dir().join("palette-query.json")
    }

    /// File holding contact form submission timestamps
    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir().join("contact-submissions.json")
    }
}
