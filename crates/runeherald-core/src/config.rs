//! Central configuration for timings and offsets.
//!
//! Every tunable of the engine lives in this one table: match-mode start
//! values and the first-spawn / interval / lead triple for each category.
//! Adjust these as game patches change; nothing is runtime-configurable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{Cadence, DayNightCycle, EventCategory, EventId};
use crate::error::ConfigError;

/// Match mode, selecting the pre-match countdown length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Standard lobby, 90s countdown.
    Normal,
    /// Bot match, 75s countdown.
    Bots,
    /// Turbo, 60s countdown.
    Turbo,
}

impl MatchMode {
    pub const ALL: [MatchMode; 3] = [MatchMode::Normal, MatchMode::Bots, MatchMode::Turbo];

    /// Elapsed-time value the clock is set to when this mode is selected.
    pub fn start_secs(self) -> i64 {
        match self {
            MatchMode::Normal => GameConfig::START_NORMAL,
            MatchMode::Bots => GameConfig::START_BOTS,
            MatchMode::Turbo => GameConfig::START_TURBO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Normal => "normal",
            MatchMode::Bots => "bots",
            MatchMode::Turbo => "turbo",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative timing table.
pub struct GameConfig;

impl GameConfig {
    // Start times (negative seconds before 00:00).
    pub const START_NORMAL: i64 = -90;
    pub const START_BOTS: i64 = -75;
    pub const START_TURBO: i64 = -60;

    // Leads: how many seconds before an event to warn.
    pub const LEAD_WISDOM: i64 = 5;
    pub const LEAD_BOUNTY: i64 = 8;
    pub const LEAD_POWER: i64 = 11;
    pub const LEAD_WATER: i64 = 14;
    pub const LEAD_ROSHAN: i64 = 17;
    pub const LEAD_DAYNIGHT: i64 = 15;

    // Repeat intervals.
    pub const INT_WISDOM: i64 = 420;
    pub const INT_BOUNTY: i64 = 240;
    pub const INT_POWER: i64 = 120;
    pub const INT_ROSHAN: i64 = 600;
    pub const INT_DAYNIGHT: i64 = 300;

    // First spawn times.
    pub const SPAWN_WISDOM: i64 = 420;
    pub const SPAWN_BOUNTY: i64 = 240;
    pub const SPAWN_POWER: i64 = 360;
    pub const SPAWN_ROSHAN: i64 = 600;

    // Water runes spawn twice and never again.
    pub const SPAWNS_WATER: [i64; 2] = [120, 240];

    /// All repeating and fixed categories, validated.
    pub fn categories() -> Result<Vec<EventCategory>, ConfigError> {
        Ok(vec![
            EventCategory::new(
                EventId::Bounty,
                Cadence::Repeating {
                    first_spawn: Self::SPAWN_BOUNTY,
                    interval: Self::INT_BOUNTY,
                },
                Self::LEAD_BOUNTY,
            )?,
            EventCategory::new(
                EventId::Power,
                Cadence::Repeating {
                    first_spawn: Self::SPAWN_POWER,
                    interval: Self::INT_POWER,
                },
                Self::LEAD_POWER,
            )?,
            EventCategory::new(
                EventId::Roshan,
                Cadence::Repeating {
                    first_spawn: Self::SPAWN_ROSHAN,
                    interval: Self::INT_ROSHAN,
                },
                Self::LEAD_ROSHAN,
            )?,
            EventCategory::new(
                EventId::Water,
                Cadence::Fixed {
                    times: Self::SPAWNS_WATER.to_vec(),
                },
                Self::LEAD_WATER,
            )?,
            EventCategory::new(
                EventId::Wisdom,
                Cadence::Repeating {
                    first_spawn: Self::SPAWN_WISDOM,
                    interval: Self::INT_WISDOM,
                },
                Self::LEAD_WISDOM,
            )?,
        ])
    }

    /// The day/night cycle, validated.
    pub fn day_night() -> Result<DayNightCycle, ConfigError> {
        DayNightCycle::new(Self::INT_DAYNIGHT, Self::LEAD_DAYNIGHT)
    }
}
