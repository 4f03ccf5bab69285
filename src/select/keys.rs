//! Key bindings for the select component.
//!
//! Three logical events drive the component:
//!
//! - **Focus next**: `↓`
//! - **Focus previous**: `↑`
//! - **Select**: `enter`
//!
//! Every other key is ignored. The bindings can be replaced or disabled
//! individually through [`SelectKeyMap`].
//!
//! ```rust
//! use bubbletea_select::select::{InputEvent, SelectKeyMap};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let keymap = SelectKeyMap::default();
//! let down = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! let other = KeyMsg { key: KeyCode::Char('a'), modifiers: KeyModifiers::NONE };
//!
//! assert_eq!(keymap.action_for(&down), Some(InputEvent::FocusNext));
//! assert_eq!(keymap.action_for(&other), None);
//! ```

use crate::key;
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A decoded input event understood by the select component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move focus toward the end of the list.
    FocusNext,
    /// Move focus toward the start of the list.
    FocusPrevious,
    /// Confirm the focused option.
    Select,
}

/// Key bindings for moving focus and confirming a selection.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Move focus to the next option.
    pub focus_next: key::Binding,
    /// Move focus to the previous option.
    pub focus_previous: key::Binding,
    /// Select the focused option.
    pub select: key::Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            focus_next: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            focus_previous: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        }
    }
}

impl SelectKeyMap {
    /// Decodes `msg` into an [`InputEvent`], or `None` for unbound keys.
    ///
    /// Bindings are checked in the order next, previous, select, so a key
    /// bound to several actions triggers the first one only.
    pub fn action_for(&self, msg: &KeyMsg) -> Option<InputEvent> {
        [
            (&self.focus_next, InputEvent::FocusNext),
            (&self.focus_previous, InputEvent::FocusPrevious),
            (&self.select, InputEvent::Select),
        ]
        .into_iter()
        .find(|(binding, _)| key::matches(msg, &[*binding]))
        .map(|(_, event)| event)
    }
}

impl key::KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.focus_previous, &self.focus_next, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.focus_previous, &self.focus_next],
            vec![&self.select],
        ]
    }
}
