#![warn(missing_docs)]

//! # bubbletea-select
//!
//! A single-selection list component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! The component renders a scrollable window of labelled options, tracks
//! which option has keyboard focus separately from which one is selected,
//! and reports the chosen value through a callback.
//!
//! ## Features
//!
//! - **Sliding viewport** that keeps the focused option centred where possible
//! - **Separate focus and selection**, with a change callback fired only when
//!   the selection actually changes
//! - **Substring highlighting** of option labels
//! - **Themable** indicators, labels and spacing through [`select::SelectTheme`]
//! - **Configurable key bindings** with help integration via [`key::KeyMap`]
//! - **Disabling** that freezes input while keeping the list on screen
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_select::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     colors: Select,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let colors = Select::new(vec![
//!             SelectOption::new("Red", "red"),
//!             SelectOption::new("Green", "green"),
//!             SelectOption::new("Blue", "blue"),
//!         ])
//!         .with_visible_option_count(3)
//!         .with_on_change(|value| eprintln!("selected {value}"));
//!
//!         (Self { colors }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.colors.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Pick a color:\n{}", self.colors.view())
//!     }
//! }
//! ```
//!
//! ## Focus Management
//!
//! The select implements [`Component`]: blurring it disables input and
//! focusing it enables input again.
//!
//! ```rust
//! use bubbletea_select::prelude::*;
//!
//! let mut select = Select::new(vec![SelectOption::new("Red", "red")]);
//! select.blur();
//! assert!(select.is_disabled());
//! select.focus();
//! assert!(select.focused());
//! ```
//!
//! ## Diagnostics
//!
//! With the `tracing` feature enabled, focus moves, selection changes and
//! ignored input are reported as `tracing` events, and each render runs
//! inside a `widget_render` span.

pub mod key;
pub mod select;

use bubbletea_rs::Cmd;

/// Components that can take and give up keyboard focus.
///
/// A focused component reacts to input; a blurred one ignores it but keeps
/// rendering its current state.
///
/// ```rust
/// use bubbletea_select::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     if component.focused() {
///         component.blur();
///     } else {
///         component.focus();
///     }
/// }
///
/// let mut select = Select::new(vec![]);
/// toggle(&mut select);
/// assert!(!select.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command for the runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use key::{Binding, KeyMap, KeyPress};
pub use select::Model as Select;
pub use select::{
    DefaultSelectTheme, InputEvent, OptionIndex, SelectKeyMap, SelectOption, SelectState,
    SelectTheme, ThemeProps,
};

/// Commonly used types in one import.
///
/// ```rust
/// use bubbletea_select::prelude::*;
///
/// let select = Select::new(vec![SelectOption::new("Red", "red")]);
/// assert_eq!(select.focused_value(), "red");
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::select::Model as Select;
    pub use crate::select::{
        DefaultSelectTheme, InputEvent, LabelSegments, OptionRow, SelectKeyMap, SelectOption,
        SelectState, SelectTheme, ThemeProps,
    };
    pub use crate::Component;
}
