use clap::Args;
use runeherald_core::{
    format_game_time, AlertEvaluator, EventId, Occurrence, HORIZON_SECS,
};
use serde_json::json;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Schedule horizon in seconds of game time
    #[arg(long, default_value_t = HORIZON_SECS)]
    pub horizon: i64,
    /// Restrict to one category (e.g. "power")
    #[arg(long, value_parser = super::parse_event_id)]
    pub category: Option<EventId>,
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let evaluator = AlertEvaluator::standard()?;

    let mut rows: Vec<(Occurrence, i64)> = Vec::new();
    for cat in evaluator.categories() {
        for occ in cat.occurrences(args.horizon) {
            rows.push((occ, occ.at_secs - cat.lead_secs));
        }
    }
    let cycle = evaluator.day_night();
    for occ in cycle.occurrences(args.horizon) {
        // Match start announces itself with no lead.
        let warn = if occ.at_secs == 0 { 0 } else { occ.at_secs - cycle.lead_secs };
        rows.push((occ, warn));
    }

    if let Some(id) = args.category {
        rows.retain(|(occ, _)| occ.id == id);
    }
    rows.sort_by_key(|(occ, _)| (occ.at_secs, occ.id));

    if args.json {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(occ, warn)| {
                json!({
                    "at_secs": occ.at_secs,
                    "at": format_game_time(occ.at_secs),
                    "id": occ.id.as_str(),
                    "warn_secs": warn,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (occ, warn) in &rows {
        println!(
            "{:>6}  {:<7} warn at {}",
            format_game_time(occ.at_secs),
            occ.id.as_str(),
            format_game_time(*warn),
        );
    }
    Ok(())
}
