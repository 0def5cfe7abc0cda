use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let entry = queries::load_entry(&pool.conn, id)?.ok_or(AppError::NoSuchEntry(id))?;

        let touched = queries::status_slugs_for_entry(&pool.conn, id)?;

        queries::delete_entry(&pool.conn, id)?;

        for slug in touched {
            queries::refresh_status_count(&pool.conn, &slug)?;
        }

        audit_log(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted entry '{}'", entry.title),
        )?;
        info(format!("Deleted entry #{} ({})", id, entry.title));

        Ok(())
    }
}
