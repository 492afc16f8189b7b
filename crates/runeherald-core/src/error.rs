//! Core error types for runeherald-core.
//!
//! The engine is pure integer arithmetic, so the taxonomy is narrow:
//! everything that can go wrong is a bad schedule definition, caught at
//! construction time. Illegal clock transitions are logged no-ops, not
//! errors.

use thiserror::Error;

use crate::category::EventId;

/// Core error type for runeherald-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Schedule-definition errors. Fatal at startup: the clock must not run
/// with a schedule that could mistime or never fire a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Repeat interval must be a positive number of seconds
    #[error("interval for '{id}' must be positive, got {interval}")]
    NonPositiveInterval { id: EventId, interval: i64 },

    /// A negative lead would warn after the event
    #[error("lead time for '{id}' must not be negative, got {lead}")]
    NegativeLead { id: EventId, lead: i64 },

    /// A lead at or above the interval would warn for the wrong cycle
    #[error("lead time for '{id}' ({lead}s) must be shorter than its interval ({interval}s)")]
    LeadNotBelowInterval {
        id: EventId,
        lead: i64,
        interval: i64,
    },

    /// Fixed schedules need at least one occurrence
    #[error("fixed schedule for '{id}' has no occurrences")]
    EmptySchedule { id: EventId },

    /// Fixed schedules must be given in strictly increasing order
    #[error("fixed schedule for '{id}' must be strictly increasing")]
    UnorderedSchedule { id: EventId },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
