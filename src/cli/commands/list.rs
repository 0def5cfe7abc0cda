use crate::api;
use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::table::EntryTable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        from,
        to,
        interaction_type,
        status,
        page,
        per_page,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *json {
            // Route through the API surface so the JSON shape matches
            // the one the browser consumes.
            let mut params = api::Params::new();
            if let Some(s) = search {
                params.insert("s".to_string(), s.clone());
            }
            if let Some(d) = from {
                params.insert("start_date".to_string(), d.clone());
            }
            if let Some(d) = to {
                params.insert("end_date".to_string(), d.clone());
            }
            if let Some(t) = interaction_type {
                params.insert("interaction_type".to_string(), t.clone());
            }
            if let Some(s) = status {
                params.insert("lead_status".to_string(), s.clone());
            }
            if let Some(p) = page {
                params.insert("page".to_string(), p.to_string());
            }
            if let Some(p) = per_page {
                params.insert("per_page".to_string(), p.to_string());
            }

            let envelope = api::entries(&mut pool, cfg, &params)?;
            let pretty = serde_json::to_string_pretty(&envelope)
                .map_err(|e| AppError::Other(format!("JSON encoding failed: {e}")))?;
            println!("{}", pretty);
            return Ok(());
        }

        let filter = build_filter(
            cfg,
            search,
            from,
            to,
            interaction_type,
            status,
            *page,
            *per_page,
        )?;

        let result = ListLogic::list(&mut pool, &filter)?;

        let mut table = EntryTable::new();
        println!("{}", table.render(&result.items));
        println!(
            "Page {} of {} ({} entries)",
            filter.page, result.pages, result.total
        );
    }
    Ok(())
}
