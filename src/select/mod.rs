//! Single-selection list component with scrolling and text highlighting.
//!
//! The component keeps two pieces of state: the option under the cursor
//! (focus) and the option the user confirmed (selection). Both are tracked
//! by option value. A fixed-size window of options is kept around the focused
//! one and slides as focus moves.
//!
//! ## Architecture
//!
//! - **Option index** (`options`): options in input order plus a value →
//!   position table, built once.
//! - **State** (`state`): a pure [`reduce`] function over [`Action`]s, wrapped
//!   by [`SelectState`], which also fires the change callback.
//! - **Windowing** (`window`): [`visible_range`] derives the visible slice
//!   from the focused position and the viewport size.
//! - **Input** (`keys`): [`SelectKeyMap`] decodes key messages into
//!   [`InputEvent`]s; the [`Model`] drops them while disabled.
//! - **Rendering** (`rendering`, `style`): visible options become
//!   [`OptionRow`]s which a [`SelectTheme`] turns into styled lines.
//!
//! ## Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `↓` | focus next option |
//! | `↑` | focus previous option |
//! | `enter` | select focused option |
//!
//! Navigation stops at both ends; there is no wraparound.
//!
//! ## Example
//!
//! ```
//! use bubbletea_select::select::{Model, SelectOption};
//! use bubbletea_rs::Model as BubbleTeaModel;
//!
//! let select = Model::new(vec![
//!     SelectOption::new("Red", "red"),
//!     SelectOption::new("Green", "green"),
//!     SelectOption::new("Yellow", "yellow"),
//! ])
//! .with_default_value("green")
//! .with_highlight_text("l");
//!
//! let view = select.view();
//! assert_eq!(view.lines().count(), 3);
//! ```

mod keys;
mod model;
mod options;
mod rendering;
mod state;
mod style;
mod window;

#[cfg(test)]
mod tests;

pub use keys::{InputEvent, SelectKeyMap};
pub use model::Model;
pub use options::{OptionIndex, SelectOption};
pub use rendering::{render_row, LabelSegments, OptionRow};
pub use state::{reduce, Action, OnChangeFunc, SelectState, State, DEFAULT_VISIBLE_OPTION_COUNT};
pub use style::{
    ContainerLayout, DefaultSelectTheme, OptionLayout, SelectTheme, ThemeProps, FOCUS_COLOR,
    FOCUS_GLYPH, SELECTED_COLOR, SELECTED_GLYPH,
};
pub use window::visible_range;

use crate::key::KeyMap as _;
use crate::{key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl key::KeyMap for Model {
    /// Bindings for the compact help view. Empty while disabled, since no
    /// key does anything then.
    fn short_help(&self) -> Vec<&key::Binding> {
        if self.is_disabled {
            return vec![];
        }
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        if self.is_disabled {
            return vec![];
        }
        self.keymap.full_help()
    }
}

impl BubbleTeaModel for Model {
    /// Creates an empty select. Hosts normally build one with
    /// [`Model::new`] instead.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(vec![]), None)
    }

    /// Handles key messages. Other messages and unbound keys are ignored.
    ///
    /// The change callback runs synchronously inside this call, at most once.
    /// No command is ever returned.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match self.keymap.action_for(key_msg) {
                Some(event) => {
                    self.handle_input(event);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(key = ?key_msg.key, "select: unbound key ignored");
                }
            }
        }
        None
    }

    /// Renders the visible options, one per line.
    fn view(&self) -> String {
        self.view_rows()
    }
}

impl Component for Model {
    /// Enables input handling.
    fn focus(&mut self) -> Option<Cmd> {
        self.set_disabled(false);
        None
    }

    /// Disables input handling. The current state stays on screen.
    fn blur(&mut self) {
        self.set_disabled(true);
    }

    fn focused(&self) -> bool {
        !self.is_disabled
    }
}
