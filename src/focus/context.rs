//! Shared handle to a [`FocusCoordinator`] for views.
//!
//! Every view gets a clone of the same `FocusContext`. Operations that end up
//! calling into a control finish mutating the registry first and release the
//! borrow, so a control's `focus`/`activate` may call back into the context.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::warn;

use super::coordinator::FocusCoordinator;
use super::types::{Axis, Direction, FocusCursor, FocusItem, FocusTarget};

#[derive(Clone, Default)]
pub struct FocusContext {
    inner: Rc<RefCell<FocusCoordinator>>,
}

impl FocusContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_group<I, T>(&self, group_id: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<FocusItem>,
    {
        self.inner.borrow_mut().register_group(group_id, items);
    }

    pub fn unregister_group(&self, group_id: &str) {
        self.inner.borrow_mut().unregister_group(group_id);
    }

    pub fn register_binding(&self, item_id: impl Into<String>, handle: Rc<dyn FocusTarget>) {
        self.inner.borrow_mut().register_binding(item_id, handle);
    }

    pub fn unregister_binding(&self, item_id: &str) {
        self.inner.borrow_mut().unregister_binding(item_id);
    }

    /// Bind `handle` to `item_id` for as long as the returned guard lives.
    pub fn bind(&self, item_id: impl Into<String>, handle: Rc<dyn FocusTarget>) -> BindingGuard {
        let item_id = item_id.into();
        self.inner
            .borrow_mut()
            .register_binding(item_id.clone(), Rc::clone(&handle));
        BindingGuard {
            coordinator: Rc::downgrade(&self.inner),
            item_id,
            handle,
        }
    }

    pub fn set_focus(&self, group_id: &str, item_id: Option<&str>) {
        let target = self.inner.borrow_mut().place_cursor(group_id, item_id);
        if let Some(target) = target {
            target.focus();
        }
    }

    pub fn move_directional(&self, axis: Axis, direction: Direction) {
        let target = self.inner.borrow_mut().step_cursor(axis, direction);
        if let Some(target) = target {
            target.focus();
        }
    }

    pub fn activate(&self) {
        let target = self.inner.borrow().active_binding();
        if let Some(target) = target {
            target.activate();
        }
    }

    pub fn clear_focus(&self) {
        self.inner.borrow_mut().clear_focus();
    }

    pub fn cursor(&self) -> FocusCursor {
        self.inner.borrow().cursor().clone()
    }

    pub fn is_group_active(&self, group_id: &str) -> bool {
        self.inner.borrow().is_group_active(group_id)
    }

    pub fn tab_index(&self, group_id: &str, item_id: &str) -> i32 {
        self.inner.borrow().tab_index(group_id, item_id)
    }

    /// Read the coordinator without cloning state out of it.
    pub fn with<R>(&self, f: impl FnOnce(&FocusCoordinator) -> R) -> R {
        f(&self.inner.borrow())
    }
}

impl std::fmt::Debug for FocusContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_borrow() {
            Ok(coordinator) => std::fmt::Debug::fmt(&*coordinator, f),
            Err(_) => f.write_str("FocusContext(<borrowed>)"),
        }
    }
}

/// Scoped binding created by [`FocusContext::bind`]; unbinds on drop.
///
/// A newer binding for the same id is left alone.
pub struct BindingGuard {
    coordinator: Weak<RefCell<FocusCoordinator>>,
    item_id: String,
    handle: Rc<dyn FocusTarget>,
}

impl BindingGuard {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        let Some(coordinator) = self.coordinator.upgrade() else {
            return;
        };
        match coordinator.try_borrow_mut() {
            Ok(mut coordinator) => {
                coordinator.unregister_binding_if(&self.item_id, &self.handle);
            }
            Err(_) => {
                warn!(item = %self.item_id, "Focus registry busy, binding left in place");
            }
        };
    }
}
