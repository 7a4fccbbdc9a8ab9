//! Theme selection state.
//!
//! The site renders in dark or light mode and one of three colour variants.
//! Only the selection lives here; colours themselves belong to the stylesheet.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Neutral,
    Warm,
    Cool,
}

impl ThemeVariant {
    /// Next variant in the cycle neutral -> warm -> cool -> neutral
    pub fn next(self) -> Self {
        match self {
            ThemeVariant::Neutral => ThemeVariant::Warm,
            ThemeVariant::Warm => ThemeVariant::Cool,
            ThemeVariant::Cool => ThemeVariant::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeVariant::Neutral => "neutral",
            ThemeVariant::Warm => "warm",
            ThemeVariant::Cool => "cool",
        }
    }
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub variant: ThemeVariant,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    pub fn cycle_variant(&mut self) {
        self.variant = self.variant.next();
    }

    /// Display name, e.g. `dark-neutral`
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mode.as_str(), self.variant.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark_neutral() {
        let theme = ThemeState::default();
        assert!(theme.is_dark());
        assert_eq!(theme.name(), "dark-neutral");
    }

    #[test]
    fn test_toggle_mode_round_trips() {
        let mut theme = ThemeState::default();
        theme.toggle_mode();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.name(), "light-neutral");
        theme.toggle_mode();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_cycle_variant_visits_all_three() {
        let mut theme = ThemeState::default();
        theme.cycle_variant();
        assert_eq!(theme.variant, ThemeVariant::Warm);
        theme.cycle_variant();
        assert_eq!(theme.variant, ThemeVariant::Cool);
        theme.cycle_variant();
        assert_eq!(theme.variant, ThemeVariant::Neutral);
    }

    #[test]
    fn test_serializes_lowercase() {
        let theme = ThemeState {
            mode: ThemeMode::Light,
            variant: ThemeVariant::Cool,
        };
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, r#"{"mode":"light","variant":"cool"}"#);
    }
}
