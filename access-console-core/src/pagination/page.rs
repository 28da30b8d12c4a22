use crate::pagination::state::{compute_slice, total_pages};

/// The visible part of a filtered collection together with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
    /// Size of the whole filtered collection
    pub total_items: usize,
}

impl<T: Clone> Page<T> {
    /// Cut page `current_page` out of `filtered`
    pub fn cut(filtered: &[T], current_page: usize, items_per_page: usize) -> Self {
        let bounds = compute_slice(filtered.len(), current_page, items_per_page);
        Self {
            items: filtered[bounds.start..bounds.end].to_vec(),
            current_page: current_page.max(1),
            items_per_page,
            total_items: filtered.len(),
        }
    }
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
