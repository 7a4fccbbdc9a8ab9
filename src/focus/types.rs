//! Focus value types shared by the coordinator and its callers.

use std::fmt;

/// Axis of a directional key intent.
///
/// Both axes walk the same 1-D item sequence; there is no grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Direction along an axis. Left and up are `Backward`, right and down are `Forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Index reached by one step from `index` in a sequence of `len` items, wrapping.
    pub fn step(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0 && index < len);
        match self {
            Direction::Backward => (index + len - 1) % len,
            Direction::Forward => (index + 1) % len,
        }
    }
}

/// One navigable entry in a focus group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusItem {
    pub id: String,
}

impl FocusItem {
    pub fn new(id: impl Into<String>) -> Self {
        FocusItem { id: id.into() }
    }
}

impl From<&str> for FocusItem {
    fn from(id: &str) -> Self {
        FocusItem::new(id)
    }
}

impl From<String> for FocusItem {
    fn from(id: String) -> Self {
        FocusItem { id }
    }
}

/// The single record of logical keyboard focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusCursor {
    pub group: Option<String>,
    pub item: Option<String>,
}

impl FocusCursor {
    pub fn is_empty(&self) -> bool {
        self.group.is_none() && self.item.is_none()
    }
}

impl fmt::Display for FocusCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.group.as_deref().unwrap_or("-"),
            self.item.as_deref().unwrap_or("-")
        )
    }
}

/// A live on-screen control that can take input focus and be activated.
///
/// `activate` must behave like a user click: whatever guards the control's
/// own action enforces still apply.
pub trait FocusTarget {
    /// Give this control input focus.
    fn focus(&self);
    /// Invoke this control's default action.
    fn activate(&self);
}
