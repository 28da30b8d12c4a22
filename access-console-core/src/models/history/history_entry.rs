use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::filter::filterable::Filterable;
use crate::models::identifiable::Identifiable;
use crate::utils::deserialize_timestamp;

/// Byte capacity of a plate. The backend column holds 20 characters and a
/// UTF-8 character takes up to 4 bytes.
pub const PLATE_CAPACITY: usize = 20 * 4;

/// # Documentation
/// One access attempt recorded by a gate: the plate read by the camera,
/// when it was read, and whether the barrier opened.
/// Field names follow the backend's `/history` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,

    /// License plate as read at the gate
    #[serde(rename = "plate")]
    pub identifier: HeaplessString<PLATE_CAPACITY>,

    #[serde(rename = "date", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,

    pub allowed: bool,

    /// Owner of the plate when it was registered at the time of the attempt
    #[serde(rename = "user_id", default)]
    pub owner_ref: Option<i64>,
}

impl Identifiable for HistoryEntry {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Filterable for HistoryEntry {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.identifier.to_lowercase().contains(needle)
    }

    fn is_allowed(&self) -> Option<bool> {
        Some(self.allowed)
    }
}
