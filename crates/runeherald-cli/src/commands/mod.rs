pub mod check;
pub mod run;
pub mod schedule;

use runeherald_core::{EventId, MatchMode};

pub(crate) fn parse_mode(s: &str) -> Result<MatchMode, String> {
    match s {
        "normal" => Ok(MatchMode::Normal),
        "bots" => Ok(MatchMode::Bots),
        "turbo" => Ok(MatchMode::Turbo),
        other => Err(format!(
            "unknown mode '{other}' (expected normal, bots, or turbo)"
        )),
    }
}

pub(crate) fn parse_event_id(s: &str) -> Result<EventId, String> {
    match s {
        "bounty" => Ok(EventId::Bounty),
        "day" => Ok(EventId::Day),
        "night" => Ok(EventId::Night),
        "power" => Ok(EventId::Power),
        "roshan" => Ok(EventId::Roshan),
        "water" => Ok(EventId::Water),
        "wisdom" => Ok(EventId::Wisdom),
        other => Err(format!(
            "unknown category '{other}' (expected bounty, day, night, power, roshan, water, or wisdom)"
        )),
    }
}
