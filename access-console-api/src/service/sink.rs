use std::sync::Arc;

/// # Documentation
/// Everything the presentation layer needs to render one list view.
/// Published after every state change of a list controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<R> {
    /// Records on the current page, in display order
    pub visible_slice: Vec<Arc<R>>,
    /// Current page number (1-based)
    pub current_page: usize,
    /// Total number of pages, at least 1
    pub total_pages: usize,
    /// Number of records that passed the filter
    pub total_items: usize,
    pub items_per_page: usize,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Destination of view snapshots; how they are rendered is not our concern.
pub trait PresentationSink<R>: Send + Sync {
    fn publish(&self, snapshot: ViewSnapshot<R>);
}
