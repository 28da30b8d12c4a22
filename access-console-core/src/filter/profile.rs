use chrono::{FixedOffset, Offset, Utc};

/// Order of the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrder {
    /// Keep the input order
    Preserve,
    /// Most recent timestamp first; records without one go last
    NewestFirst,
}

/// # Documentation
/// Which predicates a list view applies and how it orders the result.
/// One profile per view kind; the filter itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterProfile {
    pub date_range: bool,
    pub status: bool,
    pub order: ResultOrder,
    /// Offset that day boundaries of date criteria are interpreted in
    pub utc_offset: FixedOffset,
}

impl FilterProfile {
    /// Access history: date range, plate search and status, newest first.
    pub fn history() -> Self {
        Self {
            date_range: true,
            status: true,
            order: ResultOrder::NewestFirst,
            utc_offset: Utc.fix(),
        }
    }

    /// User roster: text search only, backend order.
    pub fn roster() -> Self {
        Self {
            date_range: false,
            status: false,
            order: ResultOrder::Preserve,
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }
}
