use access_console_api::domain::{FilterCriteria, StatusFilter};
use chrono::{DateTime, Utc};
use tracing::trace;

use crate::filter::filterable::Filterable;
use crate::filter::profile::{FilterProfile, ResultOrder};
use crate::utils::{end_of_day, start_of_day};

/// Predicates resolved once per evaluation rather than once per record.
#[derive(Debug, Clone)]
struct RecordPredicate {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    needle: Option<String>,
    status: Option<StatusFilter>,
}

impl RecordPredicate {
    fn new(criteria: &FilterCriteria, profile: &FilterProfile) -> Self {
        let (start, end) = if profile.date_range {
            (
                criteria.start_date.and_then(|d| start_of_day(d, profile.utc_offset)),
                criteria.end_date.and_then(|d| end_of_day(d, profile.utc_offset)),
            )
        } else {
            (None, None)
        };

        Self {
            start,
            end,
            needle: criteria.needle(),
            status: if profile.status { criteria.status_filter } else { None },
        }
    }

    fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.in_date_range(record) && self.matches_text(record) && self.matches_status(record)
    }

    fn in_date_range<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(ts) = record.timestamp() else {
            return false;
        };
        self.start.map_or(true, |start| ts >= start) && self.end.map_or(true, |end| ts <= end)
    }

    fn matches_text<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.needle
            .as_deref()
            .map_or(true, |needle| record.matches_text(needle))
    }

    fn matches_status<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        match self.status {
            None => true,
            Some(status) => record.is_allowed().is_some_and(|allowed| status.accepts(allowed)),
        }
    }
}

/// Filters a collection of records
///
/// Returns references to the records that satisfy every active predicate
/// of `criteria` under `profile`. The input is never modified and no record
/// is copied, so calling this again with the same arguments yields the same
/// elements in the same order.
///
/// # Arguments
/// * `records` - The full collection, in backend order
/// * `criteria` - The constraints to apply; `None` fields match everything
/// * `profile` - Which predicates apply and how the result is ordered
///
/// # Example
/// ```
/// use access_console_api::domain::FilterCriteria;
/// use access_console_core::filter::{filter_records, FilterProfile};
/// use access_console_core::models::UserRecord;
///
/// let users: Vec<UserRecord> = Vec::new();
/// let visible = filter_records(&users, &FilterCriteria::any().with_text_query("doe"), &FilterProfile::roster());
/// assert!(visible.is_empty());
/// ```
pub fn filter_records<'a, R, I>(records: I, criteria: &FilterCriteria, profile: &FilterProfile) -> Vec<&'a R>
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let predicate = RecordPredicate::new(criteria, profile);
    let mut filtered: Vec<&'a R> = records
        .into_iter()
        .filter(|record| predicate.matches(*record))
        .collect();

    if profile.order == ResultOrder::NewestFirst {
        // Stable, so entries with equal timestamps keep their input order.
        filtered.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    }

    trace!(matched = filtered.len(), "filtered records");
    filtered
}
