//! Key bindings shared by the components in this crate.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single logical
//! action together with the help text shown for it. Components keep their
//! bindings in a key map struct and implement [`KeyMap`] so hosts can render
//! short or full help for them.
//!
//! ```rust
//! use bubbletea_select::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Enter,
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(confirm.matches(&msg));
//! assert_eq!(confirm.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers required alongside the key.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding, e.g. `"↓"` / `"down"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
///
/// Bindings start enabled. A disabled binding never matches and is left out
/// of help views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into [`KeyPress`].
    ///
    /// ```rust
    /// use bubbletea_select::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let down = Binding::new(vec![KeyCode::Down]);
    /// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// assert_eq!(down.keys().len(), 1);
    /// assert_eq!(save.keys()[0].modifiers, KeyModifiers::CONTROL);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Builds the binding in a disabled state.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Replaces the keys of this binding.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The keys this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether `msg` triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals already report
    /// the shifted character (`G` rather than shift+`g`).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match msg.key {
                KeyCode::Char(_) => {
                    press.modifiers == msg.modifiers.difference(KeyModifiers::SHIFT)
                        || press.modifiers == msg.modifiers
                }
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Implemented by key maps so that help views can list their bindings.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Reports whether `msg` triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|binding| binding.matches(msg))
}
