use std::sync::Arc;

use access_console_api::{
    ConsoleError, CriteriaInput, ErrorReporter, FetchError, FilterCriteria, PresentationSink, RecordFetcher,
    ViewSnapshot,
};
use access_console_core::filter::{filter_records, FilterProfile, Filterable};
use access_console_core::models::{HistoryEntry, Identifiable, UserRecord};
use access_console_core::pagination::PaginationState;
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::controller::state::{FetchTicket, ListStatus};

/// # Documentation
/// Drives one list view: holds the fetched collection, the active criteria
/// and the pagination state, and pushes a [`ViewSnapshot`] to its sink after
/// every change.
///
/// - Criteria changes refilter the full collection and return to page 1.
/// - Only the most recently started fetch may replace the collection.
/// - After [`ListController::detach`] nothing is published any more.
///
/// # Type Parameters
/// * `R` - The record type of the list
/// * `F` - Fetch collaborator
/// * `S` - Presentation sink
/// * `E` - Error reporter
pub struct ListController<R, F, S, E> {
    fetcher: F,
    sink: S,
    reporter: E,
    profile: FilterProfile,
    criteria: FilterCriteria,
    pagination: PaginationState,
    records: Vec<Arc<R>>,
    filtered: Vec<Arc<R>>,
    status: ListStatus,
    error_message: Option<String>,
    issued: u64,
    pending: Option<FetchTicket>,
}

pub type HistoryListController<F, S, E> = ListController<HistoryEntry, F, S, E>;
pub type RosterListController<F, S, E> = ListController<UserRecord, F, S, E>;

impl<R, F, S, E> ListController<R, F, S, E>
where
    R: Filterable + Identifiable + Send + Sync,
    F: RecordFetcher<R>,
    S: PresentationSink<R>,
    E: ErrorReporter,
{
    pub fn new(fetcher: F, sink: S, reporter: E, profile: FilterProfile, pagination: PaginationState) -> Self {
        Self {
            fetcher,
            sink,
            reporter,
            profile,
            criteria: FilterCriteria::any(),
            pagination,
            records: Vec::new(),
            filtered: Vec::new(),
            status: ListStatus::Idle,
            error_message: None,
            issued: 0,
            pending: None,
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// The full collection as fetched
    pub fn records(&self) -> &[Arc<R>] {
        &self.records
    }

    /// The collection after filtering, in display order
    pub fn filtered(&self) -> &[Arc<R>] {
        &self.filtered
    }

    /// Fetch the full collection and show it with the current criteria
    pub async fn load(&mut self) {
        let ticket = self.start_load();
        if self.status == ListStatus::Detached {
            return;
        }
        let result = self.fetcher.fetch_all().await;
        self.finish_load(ticket, result);
    }

    /// Load again after a failed fetch
    ///
    /// # Returns
    /// * `true` - A new fetch was issued
    /// * `false` - The list is not in the `Error` state
    pub async fn retry(&mut self) -> bool {
        if self.status != ListStatus::Error {
            debug!(status = %self.status, "retry ignored");
            return false;
        }
        self.load().await;
        true
    }

    /// Issue a fetch
    ///
    /// Any fetch still in flight is superseded: its result will be dropped
    /// by [`ListController::finish_load`].
    pub fn start_load(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        if self.status == ListStatus::Detached {
            debug!(generation = ticket.0, "fetch requested on detached list");
            return ticket;
        }
        if let Some(previous) = self.pending.replace(ticket) {
            debug!(superseded = previous.0, generation = ticket.0, "superseding in-flight fetch");
        }
        self.transition(ListStatus::Loading);
        self.publish();
        ticket
    }

    /// Complete the fetch identified by `ticket`
    ///
    /// # Returns
    /// * `true` - The result was applied
    /// * `false` - The ticket was superseded or the list was detached
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<R>, FetchError>) -> bool {
        if self.pending != Some(ticket) {
            debug!(generation = ticket.0, status = %self.status, "dropping stale fetch result");
            return false;
        }
        self.pending = None;

        match result {
            Ok(records) => {
                info!(count = records.len(), "list loaded");
                self.records = records.into_iter().map(Arc::new).collect();
                self.error_message = None;
                self.transition(ListStatus::Ready);
                self.refilter();
            }
            Err(e) => {
                let error = ConsoleError::from(e);
                self.reporter.report("fetch_all", &error);
                self.error_message = Some(error.user_message());
                self.transition(ListStatus::Error);
            }
        }
        self.publish();
        true
    }

    /// Fetch one record for a detail pane; the held collection is not touched
    ///
    /// A record whose id differs from `id` is reported and discarded.
    pub async fn fetch_detail(&self, id: i64) -> Option<R> {
        let error = match self.fetcher.fetch_one(id).await {
            Ok(record) if record.get_id() == id => return Some(record),
            Ok(record) => FetchError::Decode(format!("requested record {id}, received {}", record.get_id())),
            Err(e) => e,
        };
        self.reporter.report("fetch_one", &ConsoleError::from(error));
        None
    }

    /// Interpret raw form input and apply it; uninterpretable fields are
    /// reported and left unconstrained
    pub fn apply_input(&mut self, input: &CriteriaInput) {
        let (criteria, failures) = FilterCriteria::parse(input);
        for failure in &failures {
            self.reporter.report("criteria", failure);
        }
        self.set_criteria(criteria);
    }

    /// Replace the criteria, refilter and go back to page 1
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
        self.publish();
    }

    /// Change the page size, keeping the current page where possible
    ///
    /// A size outside the allowed options is reported and nothing is
    /// published to the sink.
    pub fn set_items_per_page(&mut self, size: usize) -> bool {
        if !self.pagination.set_items_per_page(size) {
            let error = ConsoleError::parse_failure(
                "items_per_page",
                size.to_string(),
                format!("expected one of {:?}", self.pagination.page_size_options()),
            );
            self.reporter.report("items_per_page", &error);
            return false;
        }
        self.publish();
        true
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to_page(page);
        self.publish();
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page();
        self.publish();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
        self.publish();
    }

    pub fn snapshot(&self) -> ViewSnapshot<R> {
        let page = self.pagination.page_of(&self.filtered);
        ViewSnapshot {
            total_pages: page.total_pages(),
            visible_slice: page.items,
            current_page: page.current_page,
            total_items: page.total_items,
            items_per_page: page.items_per_page,
            is_loading: self.status == ListStatus::Loading,
            error_message: self.error_message.clone(),
        }
    }

    /// Tear the view down: release the collection and ignore any fetch
    /// still in flight
    pub fn detach(&mut self) {
        self.pending = None;
        self.records = Vec::new();
        self.filtered = Vec::new();
        self.pagination.on_collection_changed(0);
        self.error_message = None;
        self.transition(ListStatus::Detached);
    }

    fn refilter(&mut self) {
        self.filtered = filter_records(&self.records, &self.criteria, &self.profile)
            .into_iter()
            .cloned()
            .collect();
        self.pagination.on_collection_changed(self.filtered.len());
    }

    fn transition(&mut self, next: ListStatus) {
        if self.status != next {
            debug!(from = %self.status, to = %next, "list status changed");
        }
        self.status = next;
    }

    fn publish(&self) {
        if self.status == ListStatus::Detached {
            return;
        }
        self.sink.publish(self.snapshot());
    }
}

impl<F, S, E> HistoryListController<F, S, E>
where
    F: RecordFetcher<HistoryEntry>,
    S: PresentationSink<HistoryEntry>,
    E: ErrorReporter,
{
    /// Access history list: newest first, date and status filters enabled
    pub fn history(fetcher: F, sink: S, reporter: E, config: &ConsoleConfig) -> Self {
        Self::new(fetcher, sink, reporter, config.history_profile(), config.pagination_state())
    }
}

impl<F, S, E> RosterListController<F, S, E>
where
    F: RecordFetcher<UserRecord>,
    S: PresentationSink<UserRecord>,
    E: ErrorReporter,
{
    /// User roster list: backend order, text search only
    pub fn roster(fetcher: F, sink: S, reporter: E, config: &ConsoleConfig) -> Self {
        Self::new(fetcher, sink, reporter, config.roster_profile(), config.pagination_state())
    }
}
