use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access outcome selected in the history status dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Allowed,
    Denied,
}

impl StatusFilter {
    /// Whether an entry with the given outcome passes this filter.
    pub fn accepts(&self, allowed: bool) -> bool {
        match self {
            StatusFilter::Allowed => allowed,
            StatusFilter::Denied => !allowed,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::Allowed => write!(f, "allowed"),
            StatusFilter::Denied => write!(f, "denied"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    /// Accepts the English names and the values the legacy console form posted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allowed" | "permitido" => Ok(StatusFilter::Allowed),
            "denied" | "denegado" => Ok(StatusFilter::Denied),
            _ => Err(()),
        }
    }
}
