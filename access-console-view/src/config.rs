use std::{env, fmt::Display, str::FromStr, time::Duration};

use access_console_api::{ConsoleError, ConsoleResult};
use access_console_core::filter::FilterProfile;
use access_console_core::pagination::PaginationState;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::{Validate, ValidationError};

pub const PAGE_SIZES_VAR: &str = "CONSOLE_PAGE_SIZES";
pub const DEFAULT_PAGE_SIZE_VAR: &str = "CONSOLE_DEFAULT_PAGE_SIZE";
pub const UTC_OFFSET_VAR: &str = "CONSOLE_UTC_OFFSET_MINUTES";
pub const MESSAGE_TTL_VAR: &str = "CONSOLE_MESSAGE_TTL_MS";

/// # Documentation
/// Settings shared by every list view of the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_page_sizes"))]
#[serde(default)]
pub struct ConsoleConfig {
    /// Page sizes offered in the "items per page" selector
    #[validate(length(min = 1))]
    pub page_size_options: Vec<usize>,

    pub default_page_size: usize,

    /// Offset the date filter interprets calendar days in
    #[validate(range(min = -840, max = 840))]
    pub utc_offset_minutes: i32,

    /// How long transient notifications stay visible
    #[validate(range(min = 1))]
    pub message_ttl_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![5, 10, 20, 50],
            default_page_size: 5,
            utc_offset_minutes: 0,
            message_ttl_ms: 3000,
        }
    }
}

fn validate_page_sizes(config: &ConsoleConfig) -> Result<(), ValidationError> {
    if config.page_size_options.contains(&0) {
        return Err(ValidationError::new("zero_page_size"));
    }
    if !config.page_size_options.contains(&config.default_page_size) {
        return Err(ValidationError::new("default_page_size_not_offered"));
    }
    Ok(())
}

impl ConsoleConfig {
    /// Load from the process environment, falling back to defaults
    pub fn load() -> ConsoleResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> ConsoleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page_size_options = match lookup(PAGE_SIZES_VAR) {
            Some(raw) => parse_list(PAGE_SIZES_VAR, &raw)?,
            None => {
                info!("{PAGE_SIZES_VAR} not set, using default: {:?}", defaults.page_size_options);
                defaults.page_size_options
            }
        };

        let config = Self {
            page_size_options,
            default_page_size: try_load(&lookup, DEFAULT_PAGE_SIZE_VAR, defaults.default_page_size)?,
            utc_offset_minutes: try_load(&lookup, UTC_OFFSET_VAR, defaults.utc_offset_minutes)?,
            message_ttl_ms: try_load(&lookup, MESSAGE_TTL_VAR, defaults.message_ttl_ms)?,
        };
        config.validated()
    }

    /// Parse a JSON document; absent keys take their defaults
    pub fn from_json(json: &str) -> ConsoleResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConsoleError::Config(format!("Invalid configuration document: {e}")))?;
        config.validated()
    }

    pub fn validated(self) -> ConsoleResult<Self> {
        self.validate().map_err(|e| {
            warn!("Rejected console configuration: {e}");
            ConsoleError::Config(e.to_string())
        })?;
        Ok(self)
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    pub fn pagination_state(&self) -> PaginationState {
        PaginationState::new(self.page_size_options.clone(), self.default_page_size)
    }

    pub fn history_profile(&self) -> FilterProfile {
        FilterProfile::history().with_utc_offset(self.utc_offset())
    }

    pub fn roster_profile(&self) -> FilterProfile {
        FilterProfile::roster().with_utc_offset(self.utc_offset())
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> ConsoleResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e| {
            warn!("Invalid {key} value: {e}");
            ConsoleError::Config(format!("Invalid {key} value '{raw}': {e}"))
        }),
    }
}

fn parse_list(key: &str, raw: &str) -> ConsoleResult<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|e| {
                warn!("Invalid {key} entry: {e}");
                ConsoleError::Config(format!("Invalid {key} entry '{s}': {e}"))
            })
        })
        .collect()
}
