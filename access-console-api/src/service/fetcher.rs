use async_trait::async_trait;

use crate::error::FetchError;

/// Source of the records a list view works on.
///
/// Implemented by the HTTP client layer. The list engine calls `fetch_all`
/// once per view activation and never filters or pages on the server side.
///
/// # Type Parameters
/// * `R` - The record type returned by the backend
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl RecordFetcher<HistoryEntry> for HistoryClient {
///     async fn fetch_all(&self) -> Result<Vec<HistoryEntry>, FetchError> {
///         // GET /history
///     }
///
///     async fn fetch_one(&self, id: i64) -> Result<HistoryEntry, FetchError> {
///         // GET /history/{id}
///     }
/// }
/// ```
#[async_trait]
pub trait RecordFetcher<R>: Send + Sync {
    /// Load the complete collection
    ///
    /// # Returns
    /// * `Ok(Vec<R>)` - Every record visible to the current session, in backend order
    /// * `Err` - The backend could not be reached or answered with an error
    async fn fetch_all(&self) -> Result<Vec<R>, FetchError>;

    /// Load a single record by its identifier
    ///
    /// # Arguments
    /// * `id` - The backend identifier of the record
    async fn fetch_one(&self, id: i64) -> Result<R, FetchError>;
}
