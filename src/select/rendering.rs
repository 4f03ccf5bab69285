//! Row assembly and view rendering.
//!
//! Rendering happens in two steps. [`Model::rows`] turns the visible options
//! into [`OptionRow`]s carrying focus and selection flags and the label split
//! around the highlight text. [`Model::view_rows`] then asks the theme for
//! styles and glyphs and draws each row:
//!
//! ```text
//! ❯ Red ✔      focused and selected
//!   Green ✔    selected
//!   Ye·l·low   highlight text "l" (the middle part is emphasised)
//! ```

use super::model::Model;
use super::style::{SelectTheme, ThemeProps};

/// An option label, optionally split around a highlighted match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSegments<'a> {
    /// No highlight text, or it does not occur in the label.
    Plain(&'a str),
    /// The label split around the first occurrence of the highlight text.
    Highlighted {
        /// Text before the match.
        prefix: &'a str,
        /// The matched text.
        matched: &'a str,
        /// Text after the match.
        suffix: &'a str,
    },
}

impl<'a> LabelSegments<'a> {
    /// Splits `label` around the first case-sensitive occurrence of
    /// `highlight`. Empty or absent highlight text leaves the label whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_select::select::LabelSegments;
    ///
    /// assert_eq!(
    ///     LabelSegments::split("Yellow", Some("l")),
    ///     LabelSegments::Highlighted { prefix: "Ye", matched: "l", suffix: "low" },
    /// );
    /// assert_eq!(LabelSegments::split("Red", Some("l")), LabelSegments::Plain("Red"));
    /// assert_eq!(LabelSegments::split("Red", None), LabelSegments::Plain("Red"));
    /// ```
    pub fn split(label: &'a str, highlight: Option<&str>) -> Self {
        let Some(highlight) = highlight.filter(|h| !h.is_empty()) else {
            return Self::Plain(label);
        };

        match label.find(highlight) {
            Some(start) => {
                let end = start + highlight.len();
                Self::Highlighted {
                    prefix: &label[..start],
                    matched: &label[start..end],
                    suffix: &label[end..],
                }
            }
            None => Self::Plain(label),
        }
    }

    /// The non-empty pieces of the label in display order, each paired with
    /// whether it is the highlighted match.
    ///
    /// ```
    /// use bubbletea_select::select::LabelSegments;
    ///
    /// let spans = LabelSegments::split("Blue", Some("B")).spans();
    /// assert_eq!(spans, vec![("B", true), ("lue", false)]);
    /// ```
    pub fn spans(&self) -> Vec<(&'a str, bool)> {
        match *self {
            Self::Plain(text) => vec![(text, false)],
            Self::Highlighted {
                prefix,
                matched,
                suffix,
            } => [(prefix, false), (matched, true), (suffix, false)]
                .into_iter()
                .filter(|(text, _)| !text.is_empty())
                .collect(),
        }
    }
}

/// A visible option with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow<'a> {
    /// Value of the option.
    pub value: &'a str,
    /// The option has focus and the component is enabled.
    pub is_focused: bool,
    /// The option is the current selection.
    pub is_selected: bool,
    /// The option label, split around the highlight text if it matches.
    pub label: LabelSegments<'a>,
}

impl OptionRow<'_> {
    /// Theme props for this row.
    pub fn props(&self) -> ThemeProps {
        ThemeProps {
            is_focused: self.is_focused,
            is_selected: self.is_selected,
        }
    }
}

/// Draws one row with `theme`.
pub fn render_row(row: &OptionRow<'_>, theme: &dyn SelectTheme) -> String {
    let props = row.props();
    let layout = theme.option(props);
    let label_style = theme.label(props);

    let highlight_style = theme.highlighted_text(props).inherit(label_style.clone());
    let label: String = row
        .label
        .spans()
        .into_iter()
        .map(|(text, matched)| {
            if matched {
                highlight_style.render(text)
            } else {
                label_style.render(text)
            }
        })
        .collect();

    let mut parts = Vec::with_capacity(3);
    if row.is_focused {
        parts.push(
            theme
                .focus_indicator(props)
                .render(theme.focus_indicator_glyph()),
        );
    }
    parts.push(label);
    if row.is_selected {
        parts.push(
            theme
                .selected_indicator(props)
                .render(theme.selected_indicator_glyph()),
        );
    }

    let mut line = " ".repeat(layout.padding_left);
    line.push_str(&parts.join(&" ".repeat(layout.gap)));
    line
}

impl Model {
    /// Assembles the rows currently inside the viewport.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_select::select::{Model, SelectOption};
    ///
    /// let select = Model::new(vec![
    ///     SelectOption::new("Red", "red"),
    ///     SelectOption::new("Green", "green"),
    /// ])
    /// .with_default_value("green");
    ///
    /// let rows = select.rows();
    /// assert!(rows[0].is_focused && !rows[0].is_selected);
    /// assert!(!rows[1].is_focused && rows[1].is_selected);
    /// ```
    pub fn rows(&self) -> Vec<OptionRow<'_>> {
        let index = self.state.options();
        let focused = index.position_of(self.state.focused_value());
        let selected = index.position_of(self.state.value());
        let highlight = self.highlight_text.as_deref();
        let start = self.state.visible_range().start;

        self.state
            .visible_options()
            .iter()
            .enumerate()
            .map(|(offset, option)| {
                let position = Some(start + offset);
                OptionRow {
                    value: &option.value,
                    is_focused: !self.is_disabled && position == focused,
                    is_selected: position == selected,
                    label: LabelSegments::split(&option.label, highlight),
                }
            })
            .collect()
    }

    /// Renders the visible rows, stacked according to the theme's container
    /// layout. Returns an empty string when there is nothing to show.
    pub(super) fn view_rows(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Select",
            visible = self.state.visible_option_count(),
            disabled = self.is_disabled
        )
        .entered();

        let theme = self.theme.as_ref();
        let separator = "\n".repeat(theme.container().row_gap + 1);

        self.rows()
            .iter()
            .map(|row| render_row(row, theme))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::style::{DefaultSelectTheme, OptionLayout};

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_split_first_occurrence_only() {
        assert_eq!(
            LabelSegments::split("Hello", Some("l")),
            LabelSegments::Highlighted {
                prefix: "He",
                matched: "l",
                suffix: "lo",
            }
        );
    }

    #[test]
    fn test_split_is_case_sensitive() {
        assert_eq!(LabelSegments::split("Blue", Some("b")), LabelSegments::Plain("Blue"));
        assert_eq!(
            LabelSegments::split("Blue", Some("B")),
            LabelSegments::Highlighted {
                prefix: "",
                matched: "B",
                suffix: "lue",
            }
        );
    }

    #[test]
    fn test_split_empty_highlight_is_plain() {
        assert_eq!(LabelSegments::split("Red", Some("")), LabelSegments::Plain("Red"));
    }

    #[test]
    fn test_split_multibyte_label() {
        assert_eq!(
            LabelSegments::split("Crème brûlée", Some("brû")),
            LabelSegments::Highlighted {
                prefix: "Crème ",
                matched: "brû",
                suffix: "lée",
            }
        );
    }

    #[test]
    fn test_render_row_layouts() {
        let theme = DefaultSelectTheme;
        let mut row = OptionRow {
            value: "red",
            is_focused: true,
            is_selected: true,
            label: LabelSegments::Plain("Red"),
        };
        assert_eq!(plain(&render_row(&row, &theme)), "❯ Red ✔");

        row.is_focused = false;
        assert_eq!(plain(&render_row(&row, &theme)), "  Red ✔");

        row.is_selected = false;
        assert_eq!(plain(&render_row(&row, &theme)), "  Red");
    }

    #[test]
    fn test_spans_mark_only_the_match() {
        assert_eq!(
            LabelSegments::split("Yellow", Some("l")).spans(),
            vec![("Ye", false), ("l", true), ("low", false)]
        );
        assert_eq!(
            LabelSegments::split("Blue", Some("e")).spans(),
            vec![("Blu", false), ("e", true)]
        );
        assert_eq!(LabelSegments::Plain("Red").spans(), vec![("Red", false)]);
    }

    #[test]
    fn test_render_row_styles_only_the_match() {
        struct Flush;

        impl SelectTheme for Flush {
            fn option(&self, _props: ThemeProps) -> OptionLayout {
                OptionLayout {
                    gap: 1,
                    padding_left: 0,
                }
            }
        }

        // Render each span through the same styles the row uses, so the
        // comparison holds whatever colour profile the terminal reports.
        let theme = Flush;
        let props = ThemeProps::default();
        let label_style = theme.label(props);
        let highlight_style = theme.highlighted_text(props).inherit(label_style.clone());
        let row = OptionRow {
            value: "yellow",
            is_focused: false,
            is_selected: false,
            label: LabelSegments::split("Yellow", Some("l")),
        };

        let expected = format!(
            "{}{}{}",
            label_style.render("Ye"),
            highlight_style.render("l"),
            label_style.render("low")
        );
        assert_eq!(render_row(&row, &theme), expected);
        assert!(highlight_style.get_bold());
        assert!(!label_style.get_bold());
    }

    #[test]
    fn test_render_row_keeps_highlight_text() {
        let row = OptionRow {
            value: "yellow",
            is_focused: false,
            is_selected: false,
            label: LabelSegments::split("Yellow", Some("l")),
        };
        assert_eq!(plain(&render_row(&row, &DefaultSelectTheme)), "  Yellow");
    }
}
