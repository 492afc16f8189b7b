use clap::Args;
use runeherald_core::{format_game_time, AlertEvaluator, HORIZON_SECS};
use serde_json::json;

#[derive(Args)]
pub struct CheckArgs {
    /// Single tick (elapsed game seconds) to evaluate
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["from", "to"])]
    pub at: Option<i64>,
    /// Start of the tick range, inclusive
    #[arg(long, default_value_t = -90, allow_hyphen_values = true)]
    pub from: i64,
    /// End of the tick range, inclusive
    #[arg(long, default_value_t = HORIZON_SECS, allow_hyphen_values = true)]
    pub to: i64,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let evaluator = AlertEvaluator::standard()?;

    if let Some(t) = args.at {
        let due: Vec<&str> = evaluator.due_events(t).iter().map(|id| id.as_str()).collect();
        let out = json!({
            "elapsed_secs": t,
            "clock": format_game_time(t),
            "due": due,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    // Range form: list only the ticks on which something fires.
    let firings: Vec<serde_json::Value> = (args.from..=args.to)
        .filter_map(|t| {
            let due = evaluator.due_events(t);
            if due.is_empty() {
                return None;
            }
            let ids: Vec<&str> = due.iter().map(|id| id.as_str()).collect();
            Some(json!({
                "elapsed_secs": t,
                "clock": format_game_time(t),
                "due": ids,
            }))
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&firings)?);
    Ok(())
}
