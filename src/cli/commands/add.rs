use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::save::{SaveLogic, SaveRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Add a new entry or fully re-save an existing one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        contact,
        company,
        interaction_type,
        notes,
        status,
        edit,
    } = cmd
    {
        let req = SaveRequest {
            id: *edit,
            contact: contact.clone(),
            company: company.clone().unwrap_or_default(),
            date: date.clone(),
            interaction_type: interaction_type
                .clone()
                .unwrap_or_else(|| "email".to_string()),
            notes: notes.clone().unwrap_or_default(),
            lead_status: status.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        SaveLogic::apply(&mut pool, &req)?;
    }

    Ok(())
}
