//! The select component model: construction, configuration and accessors.

use super::keys::{InputEvent, SelectKeyMap};
use super::options::SelectOption;
use super::state::{SelectState, DEFAULT_VISIBLE_OPTION_COUNT};
use super::style::{DefaultSelectTheme, SelectTheme};

/// A single-selection list.
///
/// The component shows a window of at most `visible_option_count` options
/// around the focused one. `↑`/`↓` move focus and `enter` selects the
/// focused option, firing the change callback when the selection actually
/// changes. While disabled, input is ignored and no row is drawn as
/// focused, but the current state stays on screen.
///
/// The option list is fixed for the lifetime of the model. Option values
/// should be unique; see [`OptionIndex`](super::OptionIndex).
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::{Model, SelectOption};
/// use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let options = vec![
///     SelectOption::new("Red", "red"),
///     SelectOption::new("Green", "green"),
///     SelectOption::new("Blue", "blue"),
/// ];
///
/// let mut select = Model::new(options)
///     .with_visible_option_count(3)
///     .with_on_change(|value| println!("picked {value}"));
///
/// select.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
/// select.update(Box::new(KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE }));
///
/// assert_eq!(select.value(), "green");
/// ```
pub struct Model {
    pub(super) state: SelectState,
    pub(super) is_disabled: bool,
    pub(super) highlight_text: Option<String>,
    pub(super) keymap: SelectKeyMap,
    pub(super) theme: Box<dyn SelectTheme + Send + Sync>,
}

impl Model {
    /// Creates a select over `options` with default settings:
    /// five visible options, enabled, nothing selected, no highlight text
    /// and no change callback.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            state: SelectState::new(options, DEFAULT_VISIBLE_OPTION_COUNT),
            is_disabled: false,
            highlight_text: None,
            keymap: SelectKeyMap::default(),
            theme: Box::new(DefaultSelectTheme),
        }
    }

    /// Sets how many options are visible at once.
    pub fn with_visible_option_count(mut self, count: usize) -> Self {
        self.state.set_visible_option_count(count);
        self
    }

    /// Starts the component disabled (or enabled).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Sets the initially selected value. Focus still starts on the first
    /// option.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.state = self.state.with_default_value(value);
        self
    }

    /// Highlights the first occurrence of `text` in every label.
    pub fn with_highlight_text(mut self, text: impl Into<String>) -> Self {
        self.highlight_text = Some(text.into());
        self
    }

    /// Sets the callback fired with the value of each newly selected option.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.state = self.state.with_on_change(on_change);
        self
    }

    /// Replaces the key bindings.
    pub fn with_key_map(mut self, keymap: SelectKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the theme.
    pub fn with_theme<T>(mut self, theme: T) -> Self
    where
        T: SelectTheme + Send + Sync + 'static,
    {
        self.theme = Box::new(theme);
        self
    }

    /// Applies a decoded input event.
    ///
    /// This is the entry point for hosts that decode keys themselves.
    /// Events are dropped while the component is disabled; nothing is
    /// queued for later. Returns `true` when the selection changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.is_disabled {
            #[cfg(feature = "tracing")]
            tracing::trace!(?event, "select: input ignored while disabled");
            return false;
        }

        match event {
            InputEvent::FocusNext => {
                self.state.focus_next_option();
                false
            }
            InputEvent::FocusPrevious => {
                self.state.focus_previous_option();
                false
            }
            InputEvent::Select => self.state.select_focused_option(),
        }
    }

    /// Enables or disables input handling.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    /// Whether input is currently ignored.
    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Changes how many options are visible at once.
    pub fn set_visible_option_count(&mut self, count: usize) {
        self.state.set_visible_option_count(count);
    }

    /// How many options are visible at once.
    pub fn visible_option_count(&self) -> usize {
        self.state.visible_option_count()
    }

    /// Sets or clears the highlight text.
    pub fn set_highlight_text(&mut self, text: Option<String>) {
        self.highlight_text = text;
    }

    /// The highlight text, if any.
    pub fn highlight_text(&self) -> Option<&str> {
        self.highlight_text.as_deref()
    }

    /// Value of the focused option, or `""` when there are no options.
    pub fn focused_value(&self) -> &str {
        self.state.focused_value()
    }

    /// Value of the selected option, or `""` when nothing is selected.
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// The options currently inside the viewport.
    pub fn visible_options(&self) -> &[SelectOption] {
        self.state.visible_options()
    }

    /// The underlying focus/selection state.
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// The key bindings in use.
    pub fn key_map(&self) -> &SelectKeyMap {
        &self.keymap
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("state", &self.state)
            .field("is_disabled", &self.is_disabled)
            .field("highlight_text", &self.highlight_text)
            .field("keymap", &self.keymap)
            .finish_non_exhaustive()
    }
}
