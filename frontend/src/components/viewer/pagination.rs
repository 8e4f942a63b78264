//! Page arithmetic for the table: page count, clamping, the row window of the
//! current page, and the numbered button strip under the table.

use std::ops::Range;

/// Rows shown per page.
pub const ROWS_PER_PAGE: usize = 20;

/// Most numbered buttons in the strip, not counting the first/last shortcuts.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Pagination over `total_rows` with a 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total_rows: usize,
    current: usize,
}

impl Pager {
    /// The page is clamped into `[1, max(1, page_count)]`.
    pub fn new(total_rows: usize, current: usize) -> Self {
        let mut pager = Self {
            total_rows,
            current: 1,
        };
        pager.current = pager.clamp(current);
        pager
    }

    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(ROWS_PER_PAGE)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.page_count().max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    pub fn previous(&self) -> usize {
        self.clamp(self.current.saturating_sub(1))
    }

    pub fn next(&self) -> usize {
        self.clamp(self.current + 1)
    }

    /// Indices of the rows on the current page.
    pub fn row_range(&self) -> Range<usize> {
        let start = ((self.current - 1) * ROWS_PER_PAGE).min(self.total_rows);
        let end = (start + ROWS_PER_PAGE).min(self.total_rows);
        start..end
    }

    /// A window of at most `MAX_PAGE_BUTTONS` pages centred on the current one,
    /// shifted back when it would run past the last page. Page 1 and the last
    /// page are always reachable; an ellipsis marks any gap to them.
    pub fn buttons(&self) -> Vec<PageButton> {
        let total = self.page_count();
        if total == 0 {
            return Vec::new();
        }

        let mut start = self.current.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
        let end = (start + MAX_PAGE_BUTTONS - 1).min(total);
        if end - start + 1 < MAX_PAGE_BUTTONS && total >= MAX_PAGE_BUTTONS {
            start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
        }

        let mut buttons = Vec::with_capacity(MAX_PAGE_BUTTONS + 4);
        if start > 1 {
            buttons.push(PageButton::Page(1));
            if start > 2 {
                buttons.push(PageButton::Ellipsis);
            }
        }
        buttons.extend((start..=end).map(PageButton::Page));
        if end < total {
            if end + 1 < total {
                buttons.push(PageButton::Ellipsis);
            }
            buttons.push(PageButton::Page(total));
        }
        buttons
    }
}

#[cfg(test)]
mod tests {
    use super::PageButton::{Ellipsis, Page};
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pager::new(0, 1).page_count(), 0);
        assert_eq!(Pager::new(1, 1).page_count(), 1);
        assert_eq!(Pager::new(20, 1).page_count(), 1);
        assert_eq!(Pager::new(21, 1).page_count(), 2);
        assert_eq!(Pager::new(45, 1).page_count(), 3);
    }

    #[test]
    fn first_and_last_page_rows() {
        assert_eq!(Pager::new(45, 1).row_range(), 0..20);
        assert_eq!(Pager::new(45, 3).row_range(), 40..45);
        assert_eq!(Pager::new(0, 1).row_range(), 0..0);
    }

    #[test]
    fn current_page_is_clamped() {
        assert_eq!(Pager::new(45, 0).current(), 1);
        assert_eq!(Pager::new(45, 99).current(), 3);
        assert_eq!(Pager::new(0, 5).current(), 1);
    }

    #[test]
    fn navigation_stops_at_the_edges() {
        let first = Pager::new(45, 1);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous(), 1);

        let last = Pager::new(45, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), 3);

        let empty = Pager::new(0, 1);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
        assert_eq!(empty.next(), 1);
    }

    #[test]
    fn few_pages_have_no_shortcuts() {
        assert_eq!(Pager::new(60, 2).buttons(), vec![Page(1), Page(2), Page(3)]);
        assert!(Pager::new(0, 1).buttons().is_empty());
    }

    #[test]
    fn window_at_the_start() {
        assert_eq!(
            Pager::new(200, 1).buttons(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            Pager::new(200, 5).buttons(),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn window_next_to_the_first_page_skips_ellipsis() {
        assert_eq!(
            Pager::new(200, 4).buttons(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_is_shifted_back_at_the_end() {
        assert_eq!(
            Pager::new(200, 10).buttons(),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            Pager::new(120, 5).buttons(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
