//! Active-tab bookkeeping for [`crate::Tabs`].
//!
//! Everything here is plain data so it can be driven without a DOM: the
//! component keeps a [`Selection`] in a signal and feeds keyboard events
//! through [`navigate`].

use dioxus::prelude::Key;

use crate::key::TabKey;

/// Internally tracked selection plus the "focus after next render" flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    key: Option<TabKey>,
    focus_pending: bool,
}

impl Selection {
    /// Resolves the key to render as active.
    ///
    /// A controlled key always wins, then the internally selected one, then
    /// the default. The result may match no tab at all.
    pub fn active_key(
        &self,
        controlled: Option<&TabKey>,
        default: Option<&TabKey>,
    ) -> Option<TabKey> {
        controlled.or(self.key.as_ref()).or(default).cloned()
    }

    pub fn select(&mut self, key: TabKey) {
        tracing::trace!("select({key})");
        self.key = Some(key);
        self.focus_pending = true;
    }

    /// Notifies `notify` with `key`, then records it. The notification fires
    /// on every call, including re-selecting the current key.
    pub fn select_with(&mut self, key: TabKey, notify: impl FnOnce(&TabKey)) {
        notify(&key);
        self.select(key);
    }

    pub fn focus_pending(&self) -> bool {
        self.focus_pending
    }

    /// Clears the focus flag, returning whether it was set.
    pub fn take_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(Direction::Prev),
            Key::ArrowRight => Some(Direction::Next),
            _ => None,
        }
    }

    fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Moves one tab from `from` in `dir`, wrapping at both ends.
///
/// An unknown `from` counts as the first tab. With duplicate keys the last
/// occurrence is used.
pub fn step(keys: &[TabKey], from: &TabKey, dir: Direction) -> Option<TabKey> {
    if keys.is_empty() {
        return None;
    }
    let len = keys.len() as isize;
    let idx = keys.iter().rposition(|k| k == from).unwrap_or(0) as isize;
    let next = (idx + dir.offset() + len) % len;
    tracing::trace!("step({from}, {dir:?}): {idx} -> {next}");
    Some(keys[next as usize].clone())
}

/// What a key press on a tab should do.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    /// Not a navigation key; leave the event alone.
    Ignore,
    /// Select this key and swallow the event.
    Select(TabKey),
    /// Navigation key with nothing to move to; swallow the event.
    Swallow,
}

impl KeyAction {
    /// Whether the event's default action and propagation must be stopped.
    pub fn suppresses(&self) -> bool {
        !matches!(self, KeyAction::Ignore)
    }
}

pub fn navigate(keys: &[TabKey], from: &TabKey, key: &Key) -> KeyAction {
    match Direction::from_key(key) {
        None => KeyAction::Ignore,
        Some(dir) => match step(keys, from, dir) {
            Some(next) => KeyAction::Select(next),
            None => KeyAction::Swallow,
        },
    }
}
