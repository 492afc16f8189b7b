//! Derived spawn schedules: the ordered absolute occurrence times for
//! each category within a bounded horizon.
//!
//! Occurrences are produced lazily so a larger horizon never costs
//! memory. The modular-arithmetic evaluator is the runtime strategy; the
//! sequences here are the table form of the same schedule, used for
//! display and as the oracle in the equivalence tests.

use serde::Serialize;

use crate::category::{Cadence, DayNightCycle, EventCategory, EventId};

/// Default schedule horizon: one hour, the longest realistic match.
pub const HORIZON_SECS: i64 = 3600;

/// One concrete absolute-time instance of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub at_secs: i64,
    pub id: EventId,
}

impl EventCategory {
    /// Ordered spawn times up to and including `horizon`, lazily.
    pub fn occurrences(&self, horizon: i64) -> impl Iterator<Item = Occurrence> + '_ {
        let times: Box<dyn Iterator<Item = i64> + '_> = match &self.cadence {
            Cadence::Repeating {
                first_spawn,
                interval,
            } => {
                let step = *interval;
                Box::new(std::iter::successors(Some(*first_spawn), move |t| {
                    Some(t + step)
                }))
            }
            Cadence::Fixed { times } => Box::new(times.iter().copied()),
        };
        let id = self.id;
        times
            .take_while(move |at| *at <= horizon)
            .map(move |at_secs| Occurrence { at_secs, id })
    }
}

impl DayNightCycle {
    /// Alternating transitions from t = 0: day, night, day, ...
    ///
    /// Time 0 is a real occurrence here even though the evaluator also
    /// treats it as the distinguished match-start signal.
    pub fn occurrences(&self, horizon: i64) -> impl Iterator<Item = Occurrence> {
        let interval = self.interval_secs;
        (0i64..)
            .map(move |n| Occurrence {
                at_secs: n * interval,
                id: if n % 2 == 0 { EventId::Day } else { EventId::Night },
            })
            .take_while(move |o| o.at_secs <= horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn category(id: EventId) -> EventCategory {
        GameConfig::categories()
            .unwrap()
            .into_iter()
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn roshan_spawns_every_ten_minutes() {
        let times: Vec<i64> = category(EventId::Roshan)
            .occurrences(HORIZON_SECS)
            .map(|o| o.at_secs)
            .collect();
        assert_eq!(times, vec![600, 1200, 1800, 2400, 3000, 3600]);
    }

    #[test]
    fn repeating_occurrences_step_by_exactly_the_interval() {
        for cat in GameConfig::categories().unwrap() {
            if let Cadence::Repeating { interval, .. } = cat.cadence {
                let times: Vec<i64> =
                    cat.occurrences(HORIZON_SECS).map(|o| o.at_secs).collect();
                for w in times.windows(2) {
                    assert_eq!(w[1] - w[0], interval, "category {}", cat.id);
                }
            }
        }
    }

    #[test]
    fn water_occurrences_are_the_literal_list() {
        let times: Vec<i64> = category(EventId::Water)
            .occurrences(HORIZON_SECS)
            .map(|o| o.at_secs)
            .collect();
        assert_eq!(times, vec![120, 240]);
    }

    #[test]
    fn day_night_starts_at_zero_and_alternates() {
        let cycle = GameConfig::day_night().unwrap();
        let first: Vec<Occurrence> = cycle.occurrences(900).collect();
        assert_eq!(
            first,
            vec![
                Occurrence { at_secs: 0, id: EventId::Day },
                Occurrence { at_secs: 300, id: EventId::Night },
                Occurrence { at_secs: 600, id: EventId::Day },
                Occurrence { at_secs: 900, id: EventId::Night },
            ]
        );
    }

    #[test]
    fn horizon_is_respected_without_materialization() {
        // A very large horizon still yields lazily.
        let cat = category(EventId::Power);
        let count = cat.occurrences(1_000_000).take(50).count();
        assert_eq!(count, 50);
    }
}
