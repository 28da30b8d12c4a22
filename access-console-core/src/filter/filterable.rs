use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Trait for records the list filter can evaluate
///
/// Each record type exposes the fields the predicates look at. A record
/// that has no notion of a field returns `None`, and a profile for that
/// record type should leave the matching predicate disabled.
pub trait Filterable {
    /// When the record happened, for date-range filtering and newest-first ordering
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// Whether the record's searchable text contains `needle`
    ///
    /// `needle` is already lowercased; implementations compare against a
    /// lowercased copy of their own text.
    fn matches_text(&self, needle: &str) -> bool;

    /// Access outcome, for status filtering
    fn is_allowed(&self) -> Option<bool>;
}

impl<T: Filterable + ?Sized> Filterable for Arc<T> {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        (**self).timestamp()
    }

    fn matches_text(&self, needle: &str) -> bool {
        (**self).matches_text(needle)
    }

    fn is_allowed(&self) -> Option<bool> {
        (**self).is_allowed()
    }
}
