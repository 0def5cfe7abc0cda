use crate::api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsCache;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::interaction_type::InteractionType;
use crate::models::stats::StatsSnapshot;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET};
use serde_json::from_value;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let cache = StatsCache::default();

        let value = api::stats(&mut pool, cfg, &cache)?;

        if *json {
            let pretty = serde_json::to_string_pretty(&value)
                .map_err(|e| AppError::Other(format!("JSON encoding failed: {e}")))?;
            println!("{}", pretty);
            return Ok(());
        }

        let snapshot: StatsSnapshot = from_value(value)
            .map_err(|e| AppError::Other(format!("Malformed stats snapshot: {e}")))?;
        print_snapshot(&snapshot);
    }

    Ok(())
}

fn print_snapshot(snapshot: &StatsSnapshot) {
    header("Interactions by type");
    // Fixed enum order, not map order.
    for ty in InteractionType::ALL {
        let count = snapshot
            .by_type
            .get(ty.to_db_str())
            .copied()
            .unwrap_or(0);
        print_bar(ty.label(), count);
    }

    println!();
    header("Entries by lead status");
    if snapshot.by_status.is_empty() {
        println!("{}(no statuses defined){}", GREY, RESET);
    }
    for (name, count) in &snapshot.by_status {
        print_bar(name, *count);
    }

    println!();
    header("Interactions per month (last 12)");
    for (month, count) in &snapshot.by_month {
        print_bar(month, *count);
    }
}

fn print_bar(label: &str, count: i64) {
    let bar = "█".repeat(count.clamp(0, 50) as usize);
    println!("{:<14} {:>5}  {}{}{}", label, count, CYAN, bar, RESET);
}
