//! Viewport windowing.
//!
//! Maps the option count, the focused position and the viewport size to the
//! contiguous range of positions that should be on screen. The focused
//! option is kept centred while there is room on both sides; near either end
//! the window is pinned to the start or to the last `viewport` options.

use std::ops::Range;

/// Computes the visible range `[start, end)`.
///
/// `focus` is `None` when the focused value is not in the index (for
/// example an empty list); the window then starts at the top.
///
/// # Examples
///
/// ```
/// use bubbletea_select::select::visible_range;
///
/// // Centred.
/// assert_eq!(visible_range(7, Some(3), 3), 2..5);
/// // Pinned to the top.
/// assert_eq!(visible_range(7, Some(1), 5), 0..5);
/// // Pinned to the bottom.
/// assert_eq!(visible_range(7, Some(6), 5), 2..7);
/// // Viewport larger than the list.
/// assert_eq!(visible_range(3, Some(2), 5), 0..3);
/// ```
pub fn visible_range(count: usize, focus: Option<usize>, viewport: usize) -> Range<usize> {
    let last_start = count.saturating_sub(viewport);
    let start = focus
        .map(|position| position.saturating_sub(viewport / 2))
        .unwrap_or(0)
        .min(last_start);
    let end = start.saturating_add(viewport).min(count);
    start..end
}
