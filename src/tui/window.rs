//! Viewport windowing for scrollable lists

use std::ops::Range;

/// Width of the window while the cursor is pinned near the origin.
///
/// The reference behavior leaves pinned windows one row short of the page
/// size. Whether that is a feature or a bug is undecided, so both behaviors
/// are selectable; `Compat` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Pinned windows span `page_size - 1` rows
    #[default]
    Compat,
    /// Pinned windows span the full `page_size` rows
    Full,
}

/// Compute the visible index range for a cursor in a scrollable list.
///
/// Once the cursor reaches the midpoint the window centers on it; before
/// that it stays pinned to the origin. The range is not clipped against any
/// list: `end` may exceed the list length and callers clip while rendering.
/// `page_size` must be positive.
pub fn window(cursor: usize, page_size: usize, mode: WindowMode) -> Range<usize> {
    debug_assert!(page_size > 0, "window requires a positive page size");

    let half = page_size / 2;
    if cursor >= half {
        cursor - half..cursor + half
    } else {
        match mode {
            WindowMode::Compat => 0..page_size.saturating_sub(1),
            WindowMode::Full => 0..page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_once_the_cursor_passes_the_midpoint() {
        assert_eq!(window(5, 10, WindowMode::Compat), 0..10);
        assert_eq!(window(6, 10, WindowMode::Compat), 1..11);
        assert_eq!(window(7, 10, WindowMode::Compat), 2..12);
    }

    #[test]
    fn compat_mode_pins_one_row_short() {
        for cursor in 0..5 {
            assert_eq!(window(cursor, 10, WindowMode::Compat), 0..9);
        }
    }

    #[test]
    fn full_mode_pins_at_the_page_size() {
        for cursor in 0..=5 {
            assert_eq!(window(cursor, 10, WindowMode::Full), 0..10);
        }
        assert_eq!(window(6, 10, WindowMode::Full), 1..11);
        assert_eq!(window(7, 10, WindowMode::Full), 2..12);
    }

    #[test]
    fn odd_page_sizes_split_around_the_floor_midpoint() {
        assert_eq!(window(3, 7, WindowMode::Compat), 0..6);
        assert_eq!(window(4, 7, WindowMode::Compat), 1..7);
    }

    #[test]
    fn end_may_pass_the_list_length() {
        // len is unknown here; a cursor at 100 simply yields 95..105
        assert_eq!(window(100, 10, WindowMode::Compat), 95..105);
    }
}
