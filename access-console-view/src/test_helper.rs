//! Test doubles for the list controller's collaborators
//!
//! Every double is cheaply cloneable and shares its state between clones,
//! so a test can hand one clone to the controller and inspect the other.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use access_console_api::{ConsoleError, ErrorReporter, FetchError, PresentationSink, RecordFetcher, ViewSnapshot};
use access_console_core::models::{HistoryEntry, Identifiable, UserRecord};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use heapless::String as HeaplessString;
use parking_lot::Mutex;

use crate::config::ConsoleConfig;
use crate::controller::{HistoryListController, RosterListController};

/// Fetcher that answers `fetch_all` from a queue of scripted responses
#[derive(Clone)]
pub struct ScriptedFetcher<R> {
    responses: Arc<Mutex<VecDeque<Result<Vec<R>, FetchError>>>>,
    known: Arc<Mutex<Vec<R>>>,
    calls: Arc<AtomicUsize>,
}

impl<R: Clone> ScriptedFetcher<R> {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            known: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue a successful response; the records also become known to `fetch_one`
    pub fn respond_with(self, records: Vec<R>) -> Self {
        self.known.lock().extend(records.iter().cloned());
        self.responses.lock().push_back(Ok(records));
        self
    }

    pub fn fail_with(self, error: FetchError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn fetch_all_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R> RecordFetcher<R> for ScriptedFetcher<R>
where
    R: Identifiable + Clone + Send + Sync + 'static,
{
    async fn fetch_all(&self) -> Result<Vec<R>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".to_string())))
    }

    async fn fetch_one(&self, id: i64) -> Result<R, FetchError> {
        self.known
            .lock()
            .iter()
            .find(|r| r.get_id() == id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("record {id}")))
    }
}

/// Sink that keeps every published snapshot
#[derive(Clone)]
pub struct RecordingSink<R> {
    snapshots: Arc<Mutex<Vec<ViewSnapshot<R>>>>,
}

impl<R: Clone> RecordingSink<R> {
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().len()
    }

    pub fn last(&self) -> Option<ViewSnapshot<R>> {
        self.snapshots.lock().last().cloned()
    }

    pub fn all(&self) -> Vec<ViewSnapshot<R>> {
        self.snapshots.lock().clone()
    }
}

impl<R: Send + Sync> PresentationSink<R> for RecordingSink<R> {
    fn publish(&self, snapshot: ViewSnapshot<R>) {
        self.snapshots.lock().push(snapshot);
    }
}

/// Reporter that keeps every reported failure with its context
#[derive(Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<(String, ConsoleError)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contexts(&self) -> Vec<String> {
        self.reports.lock().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn errors(&self) -> Vec<ConsoleError> {
        self.reports.lock().iter().map(|(_, e)| e.clone()).collect()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &ConsoleError) {
        self.reports.lock().push((context.to_string(), error.clone()));
    }
}

/// `count` history entries, one hour apart starting 2024-01-01T00:00:00Z.
/// Entry `i` has plate `{i:04}ABC`, is denied when `i` is a multiple of 3,
/// and belongs to user `i % 4` (none for 0).
pub fn history_entries(count: i64) -> Vec<HistoryEntry> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (1..=count)
        .map(|i| HistoryEntry {
            id: i,
            identifier: HeaplessString::try_from(format!("{i:04}ABC").as_str()).unwrap(),
            timestamp: base + Duration::hours(i),
            allowed: i % 3 != 0,
            owner_ref: Some(i % 4).filter(|o| *o != 0),
        })
        .collect()
}

pub fn user(id: i64, first: &str, last: &str, plates: &[&str]) -> UserRecord {
    UserRecord {
        id,
        first_name: HeaplessString::try_from(first).unwrap(),
        last_name: HeaplessString::try_from(last).unwrap(),
        email: HeaplessString::try_from(format!("{}.{}@example.com", first, last).to_lowercase().as_str()).unwrap(),
        identifiers: plates
            .iter()
            .map(|p| HeaplessString::try_from(*p).unwrap())
            .collect(),
    }
}

/// Twelve users in id order; the first four share the last name "Garcia".
pub fn roster_users() -> Vec<UserRecord> {
    (1..=12)
        .map(|i| {
            let last = if i <= 4 { "Garcia".to_string() } else { format!("Lopez{i}") };
            user(i, &format!("User{i}"), &last, &[&format!("{i:04}XYZ")])
        })
        .collect()
}

pub type TestHistoryController =
    HistoryListController<ScriptedFetcher<HistoryEntry>, RecordingSink<HistoryEntry>, RecordingReporter>;
pub type TestRosterController =
    RosterListController<ScriptedFetcher<UserRecord>, RecordingSink<UserRecord>, RecordingReporter>;

/// Controller wired to test doubles plus handles to inspect them
pub struct TestContext<C, R> {
    pub controller: C,
    pub fetcher: ScriptedFetcher<R>,
    pub sink: RecordingSink<R>,
    pub reporter: RecordingReporter,
}

pub fn history_context(fetcher: ScriptedFetcher<HistoryEntry>) -> TestContext<TestHistoryController, HistoryEntry> {
    crate::logging::init_for_tests();
    let sink = RecordingSink::new();
    let reporter = RecordingReporter::new();
    let controller = HistoryListController::history(
        fetcher.clone(),
        sink.clone(),
        reporter.clone(),
        &ConsoleConfig::default(),
    );
    TestContext {
        controller,
        fetcher,
        sink,
        reporter,
    }
}

pub fn roster_context(fetcher: ScriptedFetcher<UserRecord>) -> TestContext<TestRosterController, UserRecord> {
    crate::logging::init_for_tests();
    let sink = RecordingSink::new();
    let reporter = RecordingReporter::new();
    let controller = RosterListController::roster(
        fetcher.clone(),
        sink.clone(),
        reporter.clone(),
        &ConsoleConfig::default(),
    );
    TestContext {
        controller,
        fetcher,
        sink,
        reporter,
    }
}
