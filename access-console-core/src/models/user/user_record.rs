use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::filter::filterable::Filterable;
use crate::models::history::history_entry::PLATE_CAPACITY;
use crate::models::identifiable::Identifiable;

/// Byte capacities for the backend's character-counted columns,
/// four bytes per UTF-8 character.
pub const FIRST_NAME_CAPACITY: usize = 80 * 4;
pub const LAST_NAME_CAPACITY: usize = 120 * 4;
pub const EMAIL_CAPACITY: usize = 120 * 4;

/// # Documentation
/// A console user together with the plates registered to them.
/// Field names follow the backend's `/users` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: HeaplessString<FIRST_NAME_CAPACITY>,
    pub last_name: HeaplessString<LAST_NAME_CAPACITY>,
    pub email: HeaplessString<EMAIL_CAPACITY>,

    /// Registered plates, in registration order
    #[serde(rename = "plates", default)]
    pub identifiers: Vec<HeaplessString<PLATE_CAPACITY>>,
}

impl UserRecord {
    /// Searchable text: names, email and plates joined by spaces.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {} {}", self.first_name, self.last_name, self.email);
        for plate in &self.identifiers {
            text.push(' ');
            text.push_str(plate);
        }
        text
    }
}

impl Identifiable for UserRecord {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Filterable for UserRecord {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.search_text().to_lowercase().contains(needle)
    }

    fn is_allowed(&self) -> Option<bool> {
        None
    }
}
