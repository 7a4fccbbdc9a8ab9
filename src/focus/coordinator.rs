//! Roving focus registry.
//!
//! Groups map to ordered item sequences, item ids map to live controls, and a
//! single cursor records which group and item hold logical focus. Nothing here
//! returns an error: unknown groups, unknown items and missing bindings all
//! degrade to no-ops so a keystroke can never interrupt the page.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, warn};

use super::types::{Axis, Direction, FocusCursor, FocusItem, FocusTarget};

/// Registry of focus groups, item bindings and the focus cursor.
#[derive(Default)]
pub struct FocusCoordinator {
    groups: HashMap<String, Vec<FocusItem>>,
    bindings: HashMap<String, Rc<dyn FocusTarget>>,
    cursor: FocusCursor,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------

    /// Replace the item sequence of `group_id`. Never moves the cursor.
    ///
    /// Repeated ids keep their first position.
    pub fn register_group<I, T>(&mut self, group_id: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<FocusItem>,
    {
        let group_id = group_id.into();
        let mut seen = HashSet::new();
        let mut sequence = Vec::new();
        for item in items {
            let item = item.into();
            if seen.insert(item.id.clone()) {
                sequence.push(item);
            } else {
                warn!(group = %group_id, item = %item.id, "Dropping duplicate focus item");
            }
        }
        debug!(group = %group_id, items = sequence.len(), "Registered focus group");
        self.groups.insert(group_id, sequence);
    }

    /// Remove a group. A cursor pointing at it is left dangling on purpose:
    /// later moves find nothing and do nothing.
    pub fn unregister_group(&mut self, group_id: &str) {
        if self.groups.remove(group_id).is_some() {
            debug!(group = group_id, "Unregistered focus group");
        }
    }

    /// Bind a control to an item id, replacing any previous binding.
    pub fn register_binding(&mut self, item_id: impl Into<String>, handle: Rc<dyn FocusTarget>) {
        self.bindings.insert(item_id.into(), handle);
    }

    /// Remove the binding for `item_id`, if any.
    pub fn unregister_binding(&mut self, item_id: &str) -> Option<Rc<dyn FocusTarget>> {
        self.bindings.remove(item_id)
    }

    /// Remove the binding for `item_id` only if it is still `handle`.
    ///
    /// Lets a remounted control's new binding survive the old one's teardown.
    pub fn unregister_binding_if(&mut self, item_id: &str, handle: &Rc<dyn FocusTarget>) -> bool {
        match self.bindings.get(item_id) {
            Some(current) if Rc::ptr_eq(current, handle) => {
                self.bindings.remove(item_id);
                true
            }
            _ => false,
        }
    }

    // ---------------------------------------------------------------------
    // Cursor operations
    // ---------------------------------------------------------------------

    /// Focus `group_id`, on `item_id` if it belongs to the group, else on the
    /// group's first item. An empty or unknown group leaves no item focused.
    pub fn set_focus(&mut self, group_id: &str, item_id: Option<&str>) {
        if let Some(target) = self.place_cursor(group_id, item_id) {
            target.focus();
        }
    }

    /// Step the focused item one place along `axis`, wrapping at both ends.
    pub fn move_directional(&mut self, axis: Axis, direction: Direction) {
        if let Some(target) = self.step_cursor(axis, direction) {
            target.focus();
        }
    }

    /// Run the focused item's default action once, if it has a live control.
    pub fn activate(&self) {
        if let Some(target) = self.active_binding() {
            target.activate();
        }
    }

    /// Forget the focused group and item.
    pub fn clear_focus(&mut self) {
        self.cursor = FocusCursor::default();
    }

    /// Move the cursor and return the control that should receive input focus.
    ///
    /// Split from `set_focus` so a shared owner can release its borrow before
    /// calling into the control.
    pub(crate) fn place_cursor(
        &mut self,
        group_id: &str,
        item_id: Option<&str>,
    ) -> Option<Rc<dyn FocusTarget>> {
        let items = self.groups.get(group_id);
        let chosen = match (items, item_id) {
            (Some(items), Some(wanted)) if items.iter().any(|item| item.id == wanted) => {
                Some(wanted.to_string())
            }
            (Some(items), _) => items.first().map(|item| item.id.clone()),
            (None, _) => None,
        };

        debug!(
            group = group_id,
            requested = ?item_id,
            item = ?chosen,
            "Set focus"
        );

        self.cursor.group = Some(group_id.to_string());
        self.cursor.item = chosen;
        self.cursor_binding()
    }

    /// Advance the cursor and return the control that should receive input focus.
    pub(crate) fn step_cursor(
        &mut self,
        axis: Axis,
        direction: Direction,
    ) -> Option<Rc<dyn FocusTarget>> {
        let (Some(group_id), Some(item_id)) = (&self.cursor.group, &self.cursor.item) else {
            return None;
        };
        let items = self.groups.get(group_id)?;
        let index = items.iter().position(|item| &item.id == item_id)?;
        let next = &items[direction.step(index, items.len())];

        debug!(
            group = %group_id,
            ?axis,
            ?direction,
            from = %item_id,
            to = %next.id,
            "Moved focus"
        );

        self.cursor.item = Some(next.id.clone());
        self.cursor_binding()
    }

    /// The control bound to the focused item, if any.
    pub(crate) fn active_binding(&self) -> Option<Rc<dyn FocusTarget>> {
        let binding = self.cursor_binding();
        if binding.is_none() {
            debug!(cursor = %self.cursor, "Activate ignored, no bound control");
        }
        binding
    }

    fn cursor_binding(&self) -> Option<Rc<dyn FocusTarget>> {
        let item_id = self.cursor.item.as_deref()?;
        self.bindings.get(item_id).cloned()
    }

    // ---------------------------------------------------------------------
    // Read accessors for the rendering layer
    // ---------------------------------------------------------------------

    pub fn cursor(&self) -> &FocusCursor {
        &self.cursor
    }

    pub fn focused_group(&self) -> Option<&str> {
        self.cursor.group.as_deref()
    }

    pub fn focused_item(&self) -> Option<&str> {
        self.cursor.item.as_deref()
    }

    pub fn is_group_active(&self, group_id: &str) -> bool {
        self.focused_group() == Some(group_id)
    }

    pub fn is_item_active(&self, group_id: &str, item_id: &str) -> bool {
        self.is_group_active(group_id) && self.focused_item() == Some(item_id)
    }

    /// `0` for the focused item of the focused group, `-1` for everything else.
    pub fn tab_index(&self, group_id: &str, item_id: &str) -> i32 {
        if self.is_item_active(group_id, item_id) {
            0
        } else {
            -1
        }
    }

    pub fn group_items(&self, group_id: &str) -> Option<&[FocusItem]> {
        self.groups.get(group_id).map(Vec::as_slice)
    }

    pub fn has_binding(&self, item_id: &str) -> bool {
        self.bindings.contains_key(item_id)
    }
}

impl std::fmt::Debug for FocusCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bound: Vec<&String> = self.bindings.keys().collect();
        bound.sort();
        f.debug_struct("FocusCoordinator")
            .field("groups", &self.groups)
            .field("bindings", &bound)
            .field("cursor", &self.cursor)
            .finish()
    }
}
