//! Event categories: what can happen during a match and on what cadence.
//!
//! Categories are built once at startup from [`crate::config::GameConfig`]
//! and are immutable afterwards. Validation happens here, in the
//! constructors, so the evaluator and clock never see a schedule that
//! could mistime a warning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier for one class of in-game happening.
///
/// Variants are declared in alphabetical order so the derived `Ord`
/// matches the natural sort order of the identifier strings; alert
/// dispatch relies on this for a stable order when several categories
/// fire on the same tick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventId {
    Bounty,
    Day,
    Night,
    Power,
    Roshan,
    Water,
    Wisdom,
}

impl EventId {
    pub fn as_str(self) -> &'static str {
        match self {
            EventId::Bounty => "bounty",
            EventId::Day => "day",
            EventId::Night => "night",
            EventId::Power => "power",
            EventId::Roshan => "roshan",
            EventId::Water => "water",
            EventId::Wisdom => "wisdom",
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a category's occurrences happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cadence {
    /// First spawn at `first_spawn`, then every `interval` seconds, open-ended.
    Repeating { first_spawn: i64, interval: i64 },
    /// Literal ordered list of spawn times; never repeats.
    Fixed { times: Vec<i64> },
}

/// One named class of recurring or fixed in-game event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: EventId,
    pub cadence: Cadence,
    /// Seconds before an occurrence at which its warning fires.
    pub lead_secs: i64,
}

impl EventCategory {
    /// Build a category, rejecting definitions that could never warn or
    /// would warn after the event.
    pub fn new(id: EventId, cadence: Cadence, lead_secs: i64) -> Result<Self, ConfigError> {
        if lead_secs < 0 {
            return Err(ConfigError::NegativeLead { id, lead: lead_secs });
        }
        match &cadence {
            Cadence::Repeating { interval, .. } => {
                if *interval <= 0 {
                    return Err(ConfigError::NonPositiveInterval {
                        id,
                        interval: *interval,
                    });
                }
                if lead_secs >= *interval {
                    return Err(ConfigError::LeadNotBelowInterval {
                        id,
                        lead: lead_secs,
                        interval: *interval,
                    });
                }
            }
            Cadence::Fixed { times } => {
                if times.is_empty() {
                    return Err(ConfigError::EmptySchedule { id });
                }
                if times.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(ConfigError::UnorderedSchedule { id });
                }
            }
        }
        Ok(Self {
            id,
            cadence,
            lead_secs,
        })
    }
}

/// The unconditional day/night cycle: alternating transitions every
/// `interval_secs` from t = 0, day first.
///
/// Modeled apart from [`EventCategory`] because one schedule produces two
/// identifiers ([`EventId::Day`] / [`EventId::Night`]) and because tick 0
/// doubles as the match-start signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNightCycle {
    pub interval_secs: i64,
    pub lead_secs: i64,
}

impl DayNightCycle {
    /// Validation rules match a repeating category; errors are reported
    /// under the `day` id.
    pub fn new(interval_secs: i64, lead_secs: i64) -> Result<Self, ConfigError> {
        if interval_secs <= 0 {
            return Err(ConfigError::NonPositiveInterval {
                id: EventId::Day,
                interval: interval_secs,
            });
        }
        if lead_secs < 0 {
            return Err(ConfigError::NegativeLead {
                id: EventId::Day,
                lead: lead_secs,
            });
        }
        if lead_secs >= interval_secs {
            return Err(ConfigError::LeadNotBelowInterval {
                id: EventId::Day,
                lead: lead_secs,
                interval: interval_secs,
            });
        }
        Ok(Self {
            interval_secs,
            lead_secs,
        })
    }
}
