//! Workbench configuration.
//!
//! The browser build has no process environment, so overrides are read from
//! compile-time variables:
//!
//! - `FN_SLOTS_STORAGE_KEY`: storage key for the history blob (default `fn_slots_history`)
//! - `FN_SLOTS_PER_ROW`: slots per new row, `1..=9` (default 3)
//! - `FN_SLOTS_HISTORY_LIMIT`: keep at most this many snapshots (default unbounded)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_SLOTS_PER_ROW, DEFAULT_STORAGE_KEY, MAX_SLOTS_PER_ROW};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("invalid slot count {0:?}: expected 1..={max}", max = MAX_SLOTS_PER_ROW)]
    InvalidSlotCount(String),
    #[error("invalid history limit {0:?}: expected a positive integer")]
    InvalidHistoryLimit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub slots_per_row: u32,
    pub history_limit: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            slots_per_row: DEFAULT_SLOTS_PER_ROW,
            history_limit: None,
        }
    }
}

impl BoardConfig {
    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FN_SLOTS_STORAGE_KEY"),
            option_env!("FN_SLOTS_PER_ROW"),
            option_env!("FN_SLOTS_HISTORY_LIMIT"),
        )
    }

    /// Build config from raw optional values; `None` keeps the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty key, an out-of-range slot count,
    /// or a history limit that is not a positive integer.
    pub fn from_values(
        storage_key: Option<&str>,
        slots_per_row: Option<&str>,
        history_limit: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let storage_key = match storage_key.map(str::trim) {
            None => defaults.storage_key,
            Some("") => return Err(ConfigError::EmptyStorageKey),
            Some(key) => key.to_owned(),
        };
        Ok(Self {
            storage_key,
            slots_per_row: parse_slot_count(slots_per_row)?.unwrap_or(defaults.slots_per_row),
            history_limit: parse_history_limit(history_limit)?,
        })
    }
}

fn parse_slot_count(raw: Option<&str>) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=MAX_SLOTS_PER_ROW).contains(&n) => Ok(Some(n)),
        _ => Err(ConfigError::InvalidSlotCount(raw.to_owned())),
    }
}

fn parse_history_limit(raw: Option<&str>) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidHistoryLimit(raw.to_owned())),
    }
}
