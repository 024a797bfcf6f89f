//! Paginate stage and the navigation guards mirrored from the table controls.

use std::num::NonZeroUsize;

use serde::Serialize;

/// `ceil(count / page_size)`; zero when there is nothing to show.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// One page cut out of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<T> {
    pub rows: Vec<T>,
    pub total_pages: usize,
}

/// Slice `[(page-1)*size, page*size)` out of `ordered`.
///
/// A page beyond the last one yields no rows rather than an error. Page `0` is
/// read as page `1`.
pub fn paginate<T: Clone>(ordered: &[T], page_size: NonZeroUsize, page: usize) -> PageWindow<T> {
    let size = page_size.get();
    let start = (page.max(1) - 1).saturating_mul(size);
    let rows = ordered.iter().skip(start).take(size).cloned().collect();

    PageWindow {
        rows,
        total_pages: total_pages(ordered.len(), page_size),
    }
}

/// Enabled/disabled state of the "previous" / "next" controls.
///
/// - previous is disabled on page 1
/// - next is disabled on the last page, or when there are no pages at all
///
/// A page past the end (left over after narrowing a filter) keeps "next"
/// enabled; that is how the controls have always behaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pager {
    page: usize,
    total_pages: usize,
}

impl Pager {
    pub fn new(page: usize, total_pages: usize) -> Self {
        Self {
            page: page.max(1),
            total_pages,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page != 1
    }

    pub fn has_next(&self) -> bool {
        !(self.page == self.total_pages || self.total_pages == 0)
    }

    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.page - 1)
    }

    /// `None` when the control is disabled or there is no page after this one.
    pub fn next(&self) -> Option<usize> {
        self.page.checked_add(1).filter(|_| self.has_next())
    }

    /// "page X of Y" caption.
    pub fn caption(&self) -> String {
        format!("page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> NonZeroUsize {
        NonZeroUsize::new(5).unwrap()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, five()), 0);
        assert_eq!(total_pages(1, five()), 1);
        assert_eq!(total_pages(5, five()), 1);
        assert_eq!(total_pages(6, five()), 2);
        assert_eq!(total_pages(12, five()), 3);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, five(), 1).rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, five(), 2).rows, vec![6, 7, 8, 9, 10]);

        let last = paginate(&items, five(), 3);
        assert_eq!(last.rows, vec![11, 12]);
        assert_eq!(last.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=12).collect();
        let window = paginate(&items, five(), 4);
        assert!(window.rows.is_empty());
        assert_eq!(window.total_pages, 3);

        let far = paginate(&items, five(), usize::MAX);
        assert!(far.rows.is_empty());
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, five(), 1);
        assert!(window.rows.is_empty());
        assert_eq!(window.total_pages, 0);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&items, five(), 0).rows, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pager_guards() {
        let first = Pager::new(1, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.next(), Some(2));

        let last = Pager::new(3, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.previous(), Some(2));

        let empty = Pager::new(1, 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());

        let single = Pager::new(1, 1);
        assert!(!single.has_previous());
        assert!(!single.has_next());
    }

    #[test]
    fn pager_past_the_end_keeps_next_enabled() {
        let stale = Pager::new(3, 1);
        assert!(stale.has_next());
        assert!(stale.has_previous());
    }

    #[test]
    fn pager_at_the_last_representable_page_has_no_next() {
        let end = Pager::new(usize::MAX, 3);
        assert!(end.has_next());
        assert_eq!(end.next(), None);
        assert_eq!(end.previous(), Some(usize::MAX - 1));
    }

    #[test]
    fn caption() {
        assert_eq!(Pager::new(2, 3).caption(), "page 2 of 3");
        assert_eq!(Pager::new(1, 0).caption(), "page 1 of 0");
    }
}
