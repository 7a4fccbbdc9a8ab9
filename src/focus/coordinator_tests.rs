use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Control that counts how often it was focused and clicked.
#[derive(Default)]
struct RecordingTarget {
    focused: Cell<u32>,
    clicked: Cell<u32>,
}

impl FocusTarget for RecordingTarget {
    fn focus(&self) {
        self.focused.set(self.focused.get() + 1);
    }

    fn activate(&self) {
        self.clicked.set(self.clicked.get() + 1);
    }
}

fn coordinator_with(group: &str, items: &[&str]) -> FocusCoordinator {
    let mut coordinator = FocusCoordinator::new();
    coordinator.register_group(group, items.iter().copied());
    coordinator
}

fn bind(coordinator: &mut FocusCoordinator, id: &str) -> Rc<RecordingTarget> {
    let target = Rc::new(RecordingTarget::default());
    coordinator.register_binding(id, target.clone());
    target
}

#[test]
fn test_set_focus_defaults_to_first_item() {
    let mut c = coordinator_with("nav", &["a", "b", "c"]);
    c.set_focus("nav", None);
    assert_eq!(c.focused_group(), Some("nav"));
    assert_eq!(c.focused_item(), Some("a"));
}

#[test]
fn test_set_focus_on_listed_item() {
    let mut c = coordinator_with("nav", &["a", "b", "c"]);
    let b = bind(&mut c, "b");
    c.set_focus("nav", Some("b"));
    assert_eq!(c.focused_item(), Some("b"));
    assert_eq!(b.focused.get(), 1);
}

#[test]
fn test_set_focus_on_unlisted_item_falls_back_to_first() {
    let mut c = coordinator_with("nav", &["a", "b"]);
    c.set_focus("nav", Some("zzz"));
    assert_eq!(c.focused_item(), Some("a"));
}

#[test]
fn test_set_focus_empty_or_unknown_group_clears_item() {
    let mut c = coordinator_with("empty", &[]);
    c.register_group("nav", ["a"]);
    c.set_focus("nav", None);

    c.set_focus("empty", None);
    assert_eq!(c.focused_group(), Some("empty"));
    assert_eq!(c.focused_item(), None);

    c.set_focus("missing", Some("a"));
    assert_eq!(c.focused_group(), Some("missing"));
    assert_eq!(c.focused_item(), None);
}

#[test]
fn test_move_forward_and_wrap() {
    let mut c = coordinator_with("row", &["A", "B", "C"]);
    c.set_focus("row", Some("B"));

    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(c.focused_item(), Some("C"));

    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(c.focused_item(), Some("A"));
}

#[test]
fn test_move_backward_from_first_wraps_to_last() {
    let mut c = coordinator_with("row", &["A", "B", "C", "D"]);
    c.set_focus("row", None);
    c.move_directional(Axis::Vertical, Direction::Backward);
    assert_eq!(c.focused_item(), Some("D"));
}

#[test]
fn test_vertical_axis_uses_same_sequence() {
    let mut c = coordinator_with("grid", &["A", "B", "C"]);
    c.set_focus("grid", None);
    c.move_directional(Axis::Vertical, Direction::Forward);
    assert_eq!(c.focused_item(), Some("B"));
    c.move_directional(Axis::Horizontal, Direction::Backward);
    assert_eq!(c.focused_item(), Some("A"));
}

#[test]
fn test_move_focuses_bound_control() {
    let mut c = coordinator_with("row", &["A", "B"]);
    let b = bind(&mut c, "B");
    c.set_focus("row", None);
    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(b.focused.get(), 1);
}

#[test]
fn test_move_without_binding_still_updates_cursor() {
    let mut c = coordinator_with("row", &["A", "B"]);
    c.set_focus("row", None);
    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(c.focused_item(), Some("B"));
    assert!(!c.has_binding("B"));
}

#[test]
fn test_move_is_noop_without_focus() {
    let mut c = coordinator_with("row", &["A", "B"]);
    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert!(c.cursor().is_empty());
}

#[test]
fn test_move_is_noop_in_empty_group() {
    let mut c = coordinator_with("row", &[]);
    c.set_focus("row", None);
    let before = c.cursor().clone();
    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(c.cursor(), &before);
}

#[test]
fn test_move_is_noop_when_item_filtered_out() {
    let mut c = coordinator_with("results", &["A", "B", "C"]);
    c.set_focus("results", Some("C"));
    c.register_group("results", ["A", "B"]);

    c.move_directional(Axis::Vertical, Direction::Forward);
    assert_eq!(c.focused_item(), Some("C"));
}

#[test]
fn test_reregistering_unchanged_group_keeps_focus() {
    let mut c = coordinator_with("row", &["A", "B", "C"]);
    c.set_focus("row", Some("B"));
    c.register_group("row", ["A", "B", "C"]);
    c.register_group("row", ["A", "B", "C"]);
    assert_eq!(c.focused_group(), Some("row"));
    assert_eq!(c.focused_item(), Some("B"));
}

#[test]
fn test_register_group_drops_duplicate_ids() {
    let c = coordinator_with("row", &["A", "B", "A", "C"]);
    let ids: Vec<&str> = c
        .group_items("row")
        .unwrap()
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_unregister_focused_group_leaves_stale_cursor() {
    let mut c = coordinator_with("row", &["A", "B"]);
    c.set_focus("row", Some("A"));
    c.unregister_group("row");

    assert_eq!(c.focused_group(), Some("row"));
    assert_eq!(c.focused_item(), Some("A"));
    c.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(c.focused_item(), Some("A"));
}

#[test]
fn test_activate_without_binding_is_noop() {
    let mut c = coordinator_with("row", &["A"]);
    c.set_focus("row", None);
    c.activate();
    assert_eq!(c.focused_item(), Some("A"));
}

#[test]
fn test_activate_clicks_once_per_call() {
    let mut c = coordinator_with("row", &["A", "B"]);
    let a = bind(&mut c, "A");
    c.set_focus("row", None);

    c.activate();
    assert_eq!(a.clicked.get(), 1);
    c.activate();
    assert_eq!(a.clicked.get(), 2);
}

#[test]
fn test_activate_without_focus_is_noop() {
    let mut c = coordinator_with("row", &["A"]);
    let a = bind(&mut c, "A");
    c.activate();
    assert_eq!(a.clicked.get(), 0);
}

#[test]
fn test_binding_replacement_and_unbind() {
    let mut c = coordinator_with("row", &["A"]);
    let first = bind(&mut c, "A");
    let second = bind(&mut c, "A");
    c.set_focus("row", None);
    c.activate();
    assert_eq!(first.clicked.get(), 0);
    assert_eq!(second.clicked.get(), 1);

    assert!(c.unregister_binding("A").is_some());
    assert!(c.unregister_binding("A").is_none());
    c.activate();
    assert_eq!(second.clicked.get(), 1);
}

#[test]
fn test_tab_index_marks_only_active_item_of_active_group() {
    let mut c = coordinator_with("nav", &["A", "B"]);
    c.register_group("cards", ["A", "X"]);
    c.set_focus("nav", Some("A"));

    assert_eq!(c.tab_index("nav", "A"), 0);
    assert_eq!(c.tab_index("nav", "B"), -1);
    assert_eq!(c.tab_index("cards", "A"), -1);
    assert!(c.is_group_active("nav"));
    assert!(!c.is_group_active("cards"));
}

#[test]
fn test_clear_focus() {
    let mut c = coordinator_with("nav", &["A"]);
    c.set_focus("nav", None);
    c.clear_focus();
    assert!(c.cursor().is_empty());
}

#[test]
fn test_independent_coordinators_do_not_share_state() {
    let mut one = coordinator_with("nav", &["A", "B"]);
    let two = coordinator_with("nav", &["A", "B"]);
    one.set_focus("nav", Some("B"));
    assert_eq!(one.focused_item(), Some("B"));
    assert_eq!(two.focused_item(), None);
}

// ---------------------------------------------------------------------------
// FocusContext
// ---------------------------------------------------------------------------

#[test]
fn test_context_clones_share_one_registry() {
    let ctx = FocusContext::new();
    let view = ctx.clone();
    view.register_group("nav", ["about", "projects", "contact"]);
    ctx.set_focus("nav", None);
    view.move_directional(Axis::Horizontal, Direction::Forward);
    assert_eq!(ctx.cursor().item.as_deref(), Some("projects"));
    assert_eq!(view.tab_index("nav", "projects"), 0);
}

#[test]
fn test_binding_guard_unbinds_on_drop() {
    let ctx = FocusContext::new();
    ctx.register_group("nav", ["A"]);
    ctx.set_focus("nav", None);
    let target = Rc::new(RecordingTarget::default());
    {
        let guard = ctx.bind("A", target.clone());
        assert_eq!(guard.item_id(), "A");
        ctx.activate();
    }
    ctx.activate();
    assert_eq!(target.clicked.get(), 1);
    assert!(!ctx.with(|c| c.has_binding("A")));
}

#[test]
fn test_stale_guard_keeps_newer_binding() {
    let ctx = FocusContext::new();
    let old = Rc::new(RecordingTarget::default());
    let new = Rc::new(RecordingTarget::default());
    let old_guard = ctx.bind("A", old);
    let _new_guard = ctx.bind("A", new.clone());
    drop(old_guard);

    ctx.register_group("nav", ["A"]);
    ctx.set_focus("nav", None);
    ctx.activate();
    assert_eq!(new.clicked.get(), 1);
}

#[test]
fn test_guard_outliving_context_is_harmless() {
    let target = Rc::new(RecordingTarget::default());
    let guard = {
        let ctx = FocusContext::new();
        ctx.bind("A", target)
    };
    drop(guard);
}

/// Control whose click moves focus to another group, like a nav link.
struct JumpTarget {
    ctx: FocusContext,
    to: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl FocusTarget for JumpTarget {
    fn focus(&self) {
        self.log.borrow_mut().push("focus".to_string());
    }

    fn activate(&self) {
        self.log.borrow_mut().push("activate".to_string());
        self.ctx.set_focus(self.to, None);
    }
}

#[test]
fn test_control_can_reenter_context_during_activate() {
    let ctx = FocusContext::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    ctx.register_group("nav", ["projects-link"]);
    ctx.register_group("projects", ["p1", "p2"]);
    ctx.register_binding(
        "projects-link",
        Rc::new(JumpTarget {
            ctx: ctx.clone(),
            to: "projects",
            log: log.clone(),
        }),
    );

    ctx.set_focus("nav", None);
    ctx.activate();

    assert_eq!(ctx.cursor().group.as_deref(), Some("projects"));
    assert_eq!(ctx.cursor().item.as_deref(), Some("p1"));
    assert_eq!(*log.borrow(), vec!["focus".to_string(), "activate".to_string()]);
}
