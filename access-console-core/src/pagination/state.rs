use tracing::debug;

use crate::pagination::page::Page;

/// Half-open index range `[start, end)` into a filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    pub start: usize,
    pub end: usize,
}

impl SliceBounds {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes the visible window of page `current_page` (1-based).
///
/// Both bounds are clamped into `[0, total_items]`, so a page past the end
/// yields an empty range rather than an out-of-bounds one.
pub fn compute_slice(total_items: usize, current_page: usize, items_per_page: usize) -> SliceBounds {
    let page = current_page.max(1);
    let start = (page - 1).saturating_mul(items_per_page).min(total_items);
    let end = page.saturating_mul(items_per_page).min(total_items);
    SliceBounds { start, end }
}

/// Number of pages needed for `total_items`; never less than 1.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        1
    } else {
        total_items.div_ceil(items_per_page).max(1)
    }
}

/// # Documentation
/// Current page and page size of one list view.
///
/// - `current_page` goes back to 1 whenever the filtered collection changes.
/// - Changing the page size keeps the current page, clamped to the new last page.
/// - Page sizes are restricted to the configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    page_size_options: Vec<usize>,
}

impl PaginationState {
    /// Create an empty pagination state
    ///
    /// # Arguments
    /// * `page_size_options` - Allowed page sizes; zero sizes are dropped
    /// * `items_per_page` - Initial page size; falls back to the first option when not allowed
    pub fn new(page_size_options: Vec<usize>, items_per_page: usize) -> Self {
        let mut options: Vec<usize> = page_size_options.into_iter().filter(|s| *s > 0).collect();
        if options.is_empty() {
            options.push(items_per_page.max(1));
        }
        let items_per_page = if options.contains(&items_per_page) {
            items_per_page
        } else {
            options[0]
        };

        Self {
            current_page: 1,
            items_per_page,
            total_items: 0,
            page_size_options: options,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    pub fn slice(&self) -> SliceBounds {
        compute_slice(self.total_items, self.current_page, self.items_per_page)
    }

    /// Cut the current page out of the filtered collection
    pub fn page_of<T: Clone>(&self, filtered: &[T]) -> Page<T> {
        Page::cut(filtered, self.current_page, self.items_per_page)
    }

    /// The filtered collection was recomputed; always back to page 1
    pub fn on_collection_changed(&mut self, new_total: usize) {
        self.total_items = new_total;
        self.current_page = 1;
    }

    /// Change the page size
    ///
    /// # Returns
    /// * `true` - The size is allowed and is now in effect
    /// * `false` - The size is not one of the options; nothing changed
    pub fn set_items_per_page(&mut self, new_size: usize) -> bool {
        if !self.page_size_options.contains(&new_size) {
            debug!(new_size, "rejected page size outside the allowed options");
            return false;
        }
        self.items_per_page = new_size;
        self.current_page = self.current_page.min(self.total_pages());
        true
    }

    /// Jump to `page`, clamped to `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(vec![5, 10, 20, 50], 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_slice_clamps() {
        assert_eq!(compute_slice(12, 1, 5), SliceBounds { start: 0, end: 5 });
        assert_eq!(compute_slice(12, 3, 5), SliceBounds { start: 10, end: 12 });
        assert_eq!(compute_slice(12, 4, 5), SliceBounds { start: 12, end: 12 });
        assert_eq!(compute_slice(0, 1, 5), SliceBounds { start: 0, end: 0 });
        assert_eq!(compute_slice(12, 0, 5), SliceBounds { start: 0, end: 5 });
        assert!(compute_slice(3, 2, 5).is_empty());
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_empty_state() {
        let state = PaginationState::default();

        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert!(state.slice().is_empty());
    }

    #[test]
    fn test_collection_change_resets_page() {
        let mut state = PaginationState::default();
        state.on_collection_changed(12);
        state.go_to_page(3);
        assert_eq!(state.slice(), SliceBounds { start: 10, end: 12 });

        state.on_collection_changed(4);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.slice(), SliceBounds { start: 0, end: 4 });
    }

    #[test]
    fn test_set_items_per_page_keeps_valid_page() {
        let mut state = PaginationState::default();
        state.on_collection_changed(100);
        state.go_to_page(3);

        assert!(state.set_items_per_page(10));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.slice(), SliceBounds { start: 20, end: 30 });
    }

    #[test]
    fn test_set_items_per_page_clamps_to_last_page() {
        let mut state = PaginationState::default();
        state.on_collection_changed(12);
        state.go_to_page(3);

        assert!(state.set_items_per_page(10));
        assert_eq!(state.current_page(), 2);

        assert!(state.set_items_per_page(50));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_set_items_per_page_rejects_unknown_size() {
        let mut state = PaginationState::default();
        state.on_collection_changed(12);
        state.go_to_page(2);

        assert!(!state.set_items_per_page(7));
        assert_eq!(state.items_per_page(), 5);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = PaginationState::default();
        state.on_collection_changed(12);

        state.previous_page();
        assert_eq!(state.current_page(), 1);
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);
        state.go_to_page(0);
        assert_eq!(state.current_page(), 1);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_pages_cover_collection_exactly() {
        let all: Vec<u32> = (1..=23).collect();
        for size in [5, 10, 20, 50] {
            let mut state = PaginationState::default();
            state.on_collection_changed(all.len());
            assert!(state.set_items_per_page(size));

            let mut rebuilt = Vec::new();
            for page in 1..=state.total_pages() {
                state.go_to_page(page);
                rebuilt.extend(state.page_of(&all).items);
            }
            assert_eq!(rebuilt, all, "page size {size}");
        }
    }

    #[test]
    fn test_page_of_agrees_with_state() {
        let all: Vec<u32> = (1..=12).collect();
        let mut state = PaginationState::default();
        state.on_collection_changed(all.len());
        state.go_to_page(3);

        let page = state.page_of(&all);
        assert_eq!(page.current_page, state.current_page());
        assert_eq!(page.total_pages(), state.total_pages());
        assert_eq!(page.items, all[state.slice().start..state.slice().end].to_vec());
    }

    #[test]
    fn test_new_falls_back_to_first_option() {
        let state = PaginationState::new(vec![0, 10, 25], 7);
        assert_eq!(state.items_per_page(), 10);
        assert_eq!(state.page_size_options(), &[10, 25]);

        let state = PaginationState::new(Vec::new(), 8);
        assert_eq!(state.items_per_page(), 8);
    }
}
