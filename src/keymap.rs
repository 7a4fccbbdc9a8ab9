//! Keyboard shortcut dispatch.
//!
//! Maps physical keys to abstract intents: arrows and vim `hjkl` move focus,
//! Enter/Space activate, `:` opens the command palette, `/` opens search,
//! `gg` and `G` jump to the top and bottom, Escape closes. While an editable
//! field has input focus only Escape is honoured, so typing is never hijacked.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::{KeymapConfig, DEFAULT_DOUBLE_PRESS_MS};
use crate::focus::{Axis, Direction, FocusContext};

/// A physical key, named the way browsers and terminals report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other(String),
}

impl Key {
    /// Parse a key name such as `ArrowLeft`, `Enter`, `Escape`, `" "` or `j`.
    pub fn from_name(name: &str) -> Key {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Enter" | "Return" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            " " | "Space" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    /// The event target is a text input, textarea or contenteditable element
    pub in_editable: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        KeyEvent {
            key,
            shift: false,
            in_editable: false,
        }
    }

    /// A printable character; upper-case letters carry shift.
    pub fn char(c: char) -> Self {
        KeyEvent {
            key: Key::Char(c),
            shift: c.is_uppercase(),
            in_editable: false,
        }
    }

    pub fn in_editable(mut self) -> Self {
        self.in_editable = true;
        self
    }

    /// Parse a key script: plain characters, plus `<Name>` for named keys.
    ///
    /// `"jj<Enter>"` is `j`, `j`, Enter. An unterminated `<` is a literal.
    pub fn parse_sequence(script: &str) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        let mut rest = script;
        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if let Some(end) = rest.find('>') {
                    if end > 1 {
                        events.push(KeyEvent::new(Key::from_name(&rest[1..end])));
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }
            events.push(if c == ' ' {
                KeyEvent::new(Key::Space)
            } else {
                KeyEvent::char(c)
            });
            rest = &rest[c.len_utf8()..];
        }
        events
    }
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Move(Axis, Direction),
    Activate,
    OpenCommandPalette,
    OpenSearch,
    GoToTop,
    GoToBottom,
    Escape,
    /// First half of `gg`
    Pending,
    Ignored,
}

/// Stateful key-to-intent mapper; remembers the last `g` for `gg`.
#[derive(Debug, Clone)]
pub struct KeyDispatcher {
    double_press: Duration,
    last_g: Option<Instant>,
}

impl Default for KeyDispatcher {
    fn default() -> Self {
        KeyDispatcher::new(Duration::from_millis(DEFAULT_DOUBLE_PRESS_MS))
    }
}

impl KeyDispatcher {
    pub fn new(double_press: Duration) -> Self {
        KeyDispatcher {
            double_press,
            last_g: None,
        }
    }

    pub fn with_config(config: &KeymapConfig) -> Self {
        KeyDispatcher::new(config.double_press_window())
    }

    /// Translate one key press into an intent.
    pub fn dispatch(&mut self, event: &KeyEvent, now: Instant) -> KeyIntent {
        if event.in_editable {
            return match event.key {
                Key::Escape => KeyIntent::Escape,
                _ => KeyIntent::Ignored,
            };
        }

        let intent = match &event.key {
            Key::Char('h') | Key::ArrowLeft => {
                KeyIntent::Move(Axis::Horizontal, Direction::Backward)
            }
            Key::Char('l') | Key::ArrowRight => {
                KeyIntent::Move(Axis::Horizontal, Direction::Forward)
            }
            Key::Char('k') | Key::ArrowUp => KeyIntent::Move(Axis::Vertical, Direction::Backward),
            Key::Char('j') | Key::ArrowDown => KeyIntent::Move(Axis::Vertical, Direction::Forward),
            Key::Enter | Key::Space => KeyIntent::Activate,
            Key::Char(':') => KeyIntent::OpenCommandPalette,
            Key::Char('/') => KeyIntent::OpenSearch,
            Key::Char('G') => KeyIntent::GoToBottom,
            Key::Char('g') if event.shift => KeyIntent::GoToBottom,
            Key::Char('g') => self.press_g(now),
            Key::Escape => KeyIntent::Escape,
            _ => KeyIntent::Ignored,
        };

        debug!(key = ?event.key, ?intent, "Dispatched key");
        intent
    }

    fn press_g(&mut self, now: Instant) -> KeyIntent {
        let is_double = self
            .last_g
            .is_some_and(|last| now.saturating_duration_since(last) < self.double_press);
        if is_double {
            self.last_g = None;
            KeyIntent::GoToTop
        } else {
            self.last_g = Some(now);
            KeyIntent::Pending
        }
    }

    /// Perform focus intents on `ctx`; return intents the caller must handle.
    ///
    /// Activation only fires while some group holds focus.
    pub fn apply(intent: KeyIntent, ctx: &FocusContext) -> Option<KeyIntent> {
        match intent {
            KeyIntent::Move(axis, direction) => {
                ctx.move_directional(axis, direction);
                None
            }
            KeyIntent::Activate => {
                if ctx.cursor().group.is_some() {
                    ctx.activate();
                }
                None
            }
            KeyIntent::Pending | KeyIntent::Ignored => None,
            other => Some(other),
        }
    }

    /// `dispatch` followed by `apply`.
    pub fn handle(
        &mut self,
        event: &KeyEvent,
        now: Instant,
        ctx: &FocusContext,
    ) -> Option<KeyIntent> {
        let intent = self.dispatch(event, now);
        Self::apply(intent, ctx)
    }
}
