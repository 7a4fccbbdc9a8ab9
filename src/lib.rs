//! termfolio - keyboard interaction core for a terminal-styled portfolio site
//!
//! Provides roving focus over named item groups, a fuzzy-ranked command
//! palette, vim-style key dispatch, theme selection state and the contact
//! form's spam checks.

pub mod config;
pub mod error;
pub mod focus;
pub mod keymap;
pub mod logging;
pub mod palette;
pub mod spam;
pub mod theme;
