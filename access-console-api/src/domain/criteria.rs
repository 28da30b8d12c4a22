use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status_filter::StatusFilter;
use crate::error::ConsoleError;

/// Date format used by the console's date inputs.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// # Documentation
/// Raw filter form values exactly as the administrator typed them.
/// Nothing here has been interpreted yet; see [`FilterCriteria::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaInput {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub text_query: Option<String>,
    pub status: Option<String>,
}

/// # Documentation
/// Interpreted filter constraints. A `None` field imposes no constraint.
/// Criteria are always replaced as a whole between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub text_query: Option<String>,
    pub status_filter: Option<StatusFilter>,
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the text query, trimmed; a blank query clears it.
    pub fn with_text_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.text_query = non_blank(Some(query.as_str())).map(str::to_string);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status_filter = Some(status);
        self
    }

    /// Lowercased text query, or `None` when every record matches.
    pub fn needle(&self) -> Option<String> {
        self.text_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Interprets raw form input.
    ///
    /// Values that cannot be interpreted become "no constraint" and are
    /// returned alongside the criteria as `ParseFailure`s so the caller can
    /// report them. Blank fields are not failures.
    pub fn parse(input: &CriteriaInput) -> (Self, Vec<ConsoleError>) {
        let mut failures = Vec::new();

        let start_date = parse_date("start_date", input.start_date.as_deref(), &mut failures);
        let end_date = parse_date("end_date", input.end_date.as_deref(), &mut failures);

        let status_filter = match non_blank(input.status.as_deref()) {
            None => None,
            Some(raw) => match raw.parse::<StatusFilter>() {
                Ok(status) => Some(status),
                Err(()) => {
                    failures.push(ConsoleError::parse_failure(
                        "status",
                        raw,
                        "expected 'allowed' or 'denied'",
                    ));
                    None
                }
            },
        };

        let text_query = non_blank(input.text_query.as_deref()).map(str::to_string);

        (
            Self {
                start_date,
                end_date,
                text_query,
                status_filter,
            },
            failures,
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(
    field: &'static str,
    value: Option<&str>,
    failures: &mut Vec<ConsoleError>,
) -> Option<NaiveDate> {
    let raw = non_blank(value)?;
    match NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            failures.push(ConsoleError::parse_failure(field, raw, e.to_string()));
            None
        }
    }
}
