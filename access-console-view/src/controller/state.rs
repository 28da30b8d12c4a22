use std::fmt;

/// Lifecycle of one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The full collection is held and filtered
    Ready,
    /// The last fetch failed; a retry is possible
    Error,
    /// The view was torn down; nothing is published any more
    Detached,
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStatus::Idle => write!(f, "Idle"),
            ListStatus::Loading => write!(f, "Loading"),
            ListStatus::Ready => write!(f, "Ready"),
            ListStatus::Error => write!(f, "Error"),
            ListStatus::Detached => write!(f, "Detached"),
        }
    }
}

/// Handle for one issued fetch. Only the most recently issued ticket is
/// allowed to complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub(crate) u64);
