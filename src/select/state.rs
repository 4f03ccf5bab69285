//! Focus and selection state.
//!
//! The state is a pair of values: the option under the cursor (focus) and
//! the option the user confirmed (selection). [`reduce`] is the pure
//! transition function over [`Action`]s. [`SelectState`] wraps it together
//! with the option index, the viewport size and the change callback, and is
//! the piece that fires notifications.

use super::options::{OptionIndex, SelectOption};
use super::window::visible_range;

/// Default number of options shown at once.
pub const DEFAULT_VISIBLE_OPTION_COUNT: usize = 5;

/// Callback invoked with the value of a newly selected option.
///
/// `Send` is required so the component can live inside a bubbletea-rs model.
pub type OnChangeFunc = Box<dyn FnMut(&str) + Send>;

/// Focus and selection, identified by option value.
///
/// An empty string means "nothing": no options to focus, or nothing
/// selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Value of the option under the cursor.
    pub focused_value: String,
    /// Value of the confirmed option.
    pub value: String,
}

/// A transition applied by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move focus one option toward the end. No wraparound.
    FocusNext,
    /// Move focus one option toward the start. No wraparound.
    FocusPrevious,
    /// Make the given value the selection.
    Select(String),
}

/// Applies `action` to `state` and returns the resulting state.
///
/// Unknown values and moves past either end leave the state as it was.
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::{reduce, Action, OptionIndex, SelectOption, State};
///
/// let index = OptionIndex::new(vec![
///     SelectOption::new("Red", "red"),
///     SelectOption::new("Green", "green"),
/// ]);
/// let state = State {
///     focused_value: "red".to_string(),
///     value: String::new(),
/// };
///
/// let state = reduce(&state, &index, &Action::FocusNext);
/// assert_eq!(state.focused_value, "green");
///
/// // Already at the end.
/// let state = reduce(&state, &index, &Action::FocusNext);
/// assert_eq!(state.focused_value, "green");
/// ```
pub fn reduce(state: &State, index: &OptionIndex, action: &Action) -> State {
    match action {
        Action::FocusNext => match index.next(&state.focused_value) {
            Some(next) => State {
                focused_value: next.value.clone(),
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::FocusPrevious => match index.previous(&state.focused_value) {
            Some(previous) => State {
                focused_value: previous.value.clone(),
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::Select(value) => State {
            value: value.clone(),
            ..state.clone()
        },
    }
}

/// Focus, selection and windowing for a fixed list of options.
///
/// This is the state half of the select component and can be used on its
/// own by hosts that render options themselves.
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::{SelectOption, SelectState};
///
/// let options = ["Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "White"]
///     .into_iter()
///     .map(|label| SelectOption::new(label, label.to_lowercase()))
///     .collect();
///
/// let mut state = SelectState::new(options, 5);
/// for _ in 0..6 {
///     state.focus_next_option();
/// }
///
/// assert_eq!(state.focused_value(), "white");
/// let visible: Vec<_> = state.visible_options().iter().map(|o| o.label.as_str()).collect();
/// assert_eq!(visible, ["Yellow", "Blue", "Magenta", "Cyan", "White"]);
/// ```
pub struct SelectState {
    index: OptionIndex,
    state: State,
    visible_option_count: usize,
    on_change: Option<OnChangeFunc>,
}

impl SelectState {
    /// Creates state over `options`, focusing the first one.
    pub fn new(options: Vec<SelectOption>, visible_option_count: usize) -> Self {
        let index = OptionIndex::new(options);
        let focused_value = index
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default();

        Self {
            index,
            state: State {
                focused_value,
                value: String::new(),
            },
            visible_option_count,
            on_change: None,
        }
    }

    /// Sets the initially selected value. Focus is not moved.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.state.value = value.into();
        self
    }

    /// Sets the callback fired when the selection changes.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Moves focus to the next option. Does nothing at the last option.
    pub fn focus_next_option(&mut self) {
        self.dispatch(&Action::FocusNext);
    }

    /// Moves focus to the previous option. Does nothing at the first option.
    pub fn focus_previous_option(&mut self) {
        self.dispatch(&Action::FocusPrevious);
    }

    /// Selects the focused option and notifies the change callback.
    ///
    /// Reselecting the current selection is a no-op and fires nothing.
    /// Returns `true` when the selection changed.
    pub fn select_focused_option(&mut self) -> bool {
        if self.state.focused_value == self.state.value {
            #[cfg(feature = "tracing")]
            tracing::trace!(value = %self.state.value, "select: already selected");
            return false;
        }

        let value = self.state.focused_value.clone();
        self.dispatch(&Action::Select(value));

        #[cfg(feature = "tracing")]
        tracing::debug!(value = %self.state.value, "select: selection changed");

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.state.value);
        }
        true
    }

    fn dispatch(&mut self, action: &Action) {
        let next = reduce(&self.state, &self.index, action);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?action,
            from = %self.state.focused_value,
            to = %next.focused_value,
            moved = next.focused_value != self.state.focused_value,
            "select: dispatch"
        );

        self.state = next;
    }

    /// The options currently inside the viewport, in input order.
    pub fn visible_options(&self) -> &[SelectOption] {
        let options = self.index.options();
        options.get(self.visible_range()).unwrap_or_default()
    }

    /// Positions of the options currently inside the viewport.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        visible_range(
            self.index.len(),
            self.index.position_of(&self.state.focused_value),
            self.visible_option_count,
        )
    }

    /// Changes the viewport size. Focus and selection are kept.
    pub fn set_visible_option_count(&mut self, count: usize) {
        self.visible_option_count = count;
    }

    /// Current viewport size.
    pub fn visible_option_count(&self) -> usize {
        self.visible_option_count
    }

    /// Value of the focused option, or `""` when there are no options.
    pub fn focused_value(&self) -> &str {
        &self.state.focused_value
    }

    /// Value of the selected option, or `""` when nothing is selected.
    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Snapshot of focus and selection.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The option index backing this state.
    pub fn options(&self) -> &OptionIndex {
        &self.index
    }
}

impl std::fmt::Debug for SelectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectState")
            .field("index", &self.index)
            .field("state", &self.state)
            .field("visible_option_count", &self.visible_option_count)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
