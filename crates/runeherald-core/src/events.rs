use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::EventId;
use crate::clock::ClockState;
use crate::config::MatchMode;

/// Every state change in the clock produces an event. The CLI prints
/// them; a GUI layer would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClockEvent {
    ModeSelected {
        mode: MatchMode,
        elapsed_secs: i64,
        at: DateTime<Utc>,
    },
    ClockStarted {
        mode: MatchMode,
        elapsed_secs: i64,
        at: DateTime<Utc>,
    },
    ClockPaused {
        elapsed_secs: i64,
        at: DateTime<Utc>,
    },
    ClockResumed {
        elapsed_secs: i64,
        at: DateTime<Utc>,
    },
    ClockReset {
        mode: MatchMode,
        elapsed_secs: i64,
        at: DateTime<Utc>,
    },
    /// One or more category warnings fired on this tick, already sorted
    /// and de-duplicated.
    AlertsFired {
        elapsed_secs: i64,
        alerts: Vec<EventId>,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: ClockState,
        mode: MatchMode,
        elapsed_secs: i64,
        /// Signed mm:ss rendering of `elapsed_secs`.
        clock: String,
        at: DateTime<Utc>,
    },
}
