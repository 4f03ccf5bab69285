//! Options and the position index built over them.
//!
//! [`OptionIndex`] stores the options in input order and keeps a separate
//! value → position table, so "next" and "previous" are plain position
//! arithmetic. The index is built once and never mutated.

use std::collections::HashMap;

/// A single choice offered by the select component.
///
/// `value` identifies the option to the host application and is what the
/// change callback receives; `label` is what gets displayed.
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::SelectOption;
///
/// let option = SelectOption::new("Red", "red");
/// assert_eq!(option.label, "Red");
/// assert_eq!(option.value, "red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    /// Text shown in the list.
    pub label: String,
    /// Identifier reported through the change callback.
    pub value: String,
}

impl SelectOption {
    /// Creates an option from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for SelectOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Immutable, order-preserving index over a list of options.
///
/// Options live in a flat vector in input order; their position in that
/// vector is their index. Lookups by value go through a hash table that
/// maps each value to the position of its first occurrence.
///
/// Values are expected to be unique. When they are not, every entry is
/// still reachable by position ([`at`](Self::at)) and is rendered, but
/// value lookups only ever see the first entry carrying that value. The
/// component marks focus and selection by position, so only that first
/// entry can show the cursor or the selected glyph.
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::{OptionIndex, SelectOption};
///
/// let index = OptionIndex::new(vec![
///     SelectOption::new("Red", "red"),
///     SelectOption::new("Green", "green"),
/// ]);
///
/// assert_eq!(index.next("red").map(|o| o.value.as_str()), Some("green"));
/// assert!(index.next("green").is_none());
/// assert_eq!(index.position_of("green"), Some(1));
/// assert_eq!(index.position_of("blue"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
    entries: Vec<SelectOption>,
    positions: HashMap<String, usize>,
}

impl OptionIndex {
    /// Builds the index in a single pass over `options`.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let mut positions = HashMap::with_capacity(options.len());
        for (position, option) in options.iter().enumerate() {
            positions.entry(option.value.clone()).or_insert(position);
        }

        Self {
            entries: options,
            positions,
        }
    }

    /// The option right after the one identified by `value`, if any.
    pub fn next(&self, value: &str) -> Option<&SelectOption> {
        let position = self.position_of(value)?;
        self.at(position + 1)
    }

    /// The option right before the one identified by `value`, if any.
    pub fn previous(&self, value: &str) -> Option<&SelectOption> {
        let position = self.position_of(value)?;
        position.checked_sub(1).and_then(|p| self.at(p))
    }

    /// Zero-based position of `value`, or `None` when it is not indexed.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.positions.get(value).copied()
    }

    /// The option at `position`, or `None` when out of range.
    pub fn at(&self, position: usize) -> Option<&SelectOption> {
        self.entries.get(position)
    }

    /// The first option in input order.
    pub fn first(&self) -> Option<&SelectOption> {
        self.entries.first()
    }

    /// Options in input order, duplicates included.
    pub fn options(&self) -> &[SelectOption] {
        &self.entries
    }

    /// Number of indexed options, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every option carries a distinct value.
    pub fn has_unique_values(&self) -> bool {
        self.positions.len() == self.entries.len()
    }
}

impl FromIterator<SelectOption> for OptionIndex {
    fn from_iter<T: IntoIterator<Item = SelectOption>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
