use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        search,
        from,
        to,
        interaction_type,
        status,
        page,
        per_page,
        force,
    } = cmd
    {
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

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, format, file, &filter, *force)?;
    }
    Ok(())
}
