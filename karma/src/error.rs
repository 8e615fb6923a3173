//! Unified error types for the karma engine
//!
//! This module defines error types for each layer:
//! - `StoreError`: Failures of the persistence port
//! - `KarmaError`: Engine outcomes returned to the command layer
//! - `ConfigError`: Configuration parsing errors

use thiserror::Error;

/// Persistence port errors - the backing store could not serve the call
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Engine outcomes that are not a plain success.
///
/// Everything except `StoreUnavailable` is an expected, recoverable outcome the
/// command layer renders as user-facing text.
#[derive(Debug, Error)]
pub enum KarmaError {
    #[error("cannot modify {term} for {remaining_secs} more second(s)")]
    CooldownActive { term: String, remaining_secs: u64 },

    #[error("{target} is already linked to {source_term}")]
    AlreadyLinked { source_term: String, target: String },

    #[error("{target} is not linked to {source_term}")]
    NotLinked { source_term: String, target: String },

    #[error("there are no terms being tracked yet")]
    NoTermsTracked,

    #[error("{0} has never been modified")]
    NeverModified(String),

    #[error("invalid term name: {0:?}")]
    InvalidTermName(String),

    #[error("list limit must be a positive integer, got {0}")]
    InvalidLimit(usize),

    #[error("{0}")]
    StoreUnavailable(#[from] StoreError),
}

impl KarmaError {
    /// True for outcomes that are part of normal operation, false for store failures
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, KarmaError::StoreUnavailable(_))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}
