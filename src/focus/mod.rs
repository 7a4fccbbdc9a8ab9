//! Keyboard focus coordination.
//!
//! Views register named groups of items and bind each item id to its live
//! control. Directional intents then walk the focused group's sequence,
//! wrapping at both ends, and `activate` clicks the focused control.
//!
//! # Example
//!
//! ```ignore
//! use termfolio::focus::{Axis, Direction, FocusContext};
//!
//! let ctx = FocusContext::new();
//! ctx.register_group("nav", ["about", "projects", "contact"]);
//! ctx.set_focus("nav", None);
//! ctx.move_directional(Axis::Horizontal, Direction::Forward);
//! assert_eq!(ctx.cursor().item.as_deref(), Some("projects"));
//! ```

mod context;
mod coordinator;
mod types;

pub use context::{BindingGuard, FocusContext};
pub use coordinator::FocusCoordinator;
pub use types::{Axis, Direction, FocusCursor, FocusItem, FocusTarget};

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
