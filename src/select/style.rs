//! Theming for the select component.
//!
//! Styles are resolved per named element from the state of the option being
//! drawn ([`ThemeProps`]). Implement [`SelectTheme`] to restyle the
//! component; every method has a default, so a theme only overrides what it
//! changes. [`DefaultSelectTheme`] uses the defaults as-is.
//!
//! ## Elements
//!
//! - `container`: how option rows are stacked
//! - `option`: spacing of a single row
//! - `focus_indicator`: glyph in front of the focused row (`❯`)
//! - `selected_indicator`: glyph after the selected row (`✔`)
//! - `label`: option text
//! - `highlighted_text`: the part of a label matching the highlight text
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_select::select::{SelectTheme, ThemeProps};
//! use lipgloss_extras::prelude::*;
//!
//! struct Plain;
//!
//! impl SelectTheme for Plain {
//!     fn label(&self, _props: ThemeProps) -> Style {
//!         Style::new()
//!     }
//!
//!     fn focus_indicator_glyph(&self) -> &str {
//!         ">"
//!     }
//! }
//! ```

use lipgloss_extras::prelude::*;

/// Glyph drawn in front of the focused option.
pub const FOCUS_GLYPH: &str = "❯";

/// Glyph drawn after the selected option.
pub const SELECTED_GLYPH: &str = "✔";

/// ANSI colour of the focus glyph and the focused label (blue).
pub const FOCUS_COLOR: &str = "4";

/// ANSI colour of the selected glyph and the selected label (green).
pub const SELECTED_COLOR: &str = "2";

/// State of the element being styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeProps {
    /// The option is under the cursor and the component is enabled.
    pub is_focused: bool,
    /// The option is the current selection.
    pub is_selected: bool,
}

/// Layout of the option container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    /// Blank lines between option rows.
    pub row_gap: usize,
}

/// Layout of a single option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLayout {
    /// Columns between the parts of a row (indicator, label, indicator).
    pub gap: usize,
    /// Columns before the row.
    pub padding_left: usize,
}

/// Resolves styles for each element of the select component.
pub trait SelectTheme {
    /// Container layout. Rows are stacked vertically with no gap.
    fn container(&self) -> ContainerLayout {
        ContainerLayout { row_gap: 0 }
    }

    /// Row layout. Unfocused rows are indented by two columns so they line
    /// up with the label of the focused row.
    fn option(&self, props: ThemeProps) -> OptionLayout {
        OptionLayout {
            gap: 1,
            padding_left: if props.is_focused { 0 } else { 2 },
        }
    }

    /// Style of the focus glyph.
    fn focus_indicator(&self, _props: ThemeProps) -> Style {
        Style::new().foreground(Color::from(FOCUS_COLOR))
    }

    /// Style of the selected glyph.
    fn selected_indicator(&self, _props: ThemeProps) -> Style {
        Style::new().foreground(Color::from(SELECTED_COLOR))
    }

    /// Colour of the option label, or `None` for the terminal default.
    /// Focus takes precedence over selection.
    fn label_color(&self, props: ThemeProps) -> Option<&str> {
        if props.is_focused {
            Some(FOCUS_COLOR)
        } else if props.is_selected {
            Some(SELECTED_COLOR)
        } else {
            None
        }
    }

    /// Style of the option label, coloured by [`label_color`](Self::label_color).
    fn label(&self, props: ThemeProps) -> Style {
        match self.label_color(props) {
            Some(color) => Style::new().foreground(Color::from(color)),
            None => Style::new(),
        }
    }

    /// Style of the highlighted span inside a label.
    fn highlighted_text(&self, _props: ThemeProps) -> Style {
        Style::new().bold(true)
    }

    /// Glyph drawn in front of the focused option.
    fn focus_indicator_glyph(&self) -> &str {
        FOCUS_GLYPH
    }

    /// Glyph drawn after the selected option.
    fn selected_indicator_glyph(&self) -> &str {
        SELECTED_GLYPH
    }
}

/// The stock theme: blue focus, green selection, bold highlights.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSelectTheme;

impl SelectTheme for DefaultSelectTheme {}
