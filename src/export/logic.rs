// src/export/logic.rs

use crate::core::list::ListLogic;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::filter::FilterRequest;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the page selected by `filter` — the same rows a `list`
    /// with identical arguments would render.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        filter: &FilterRequest,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let page = ListLogic::list(pool, filter)?;

        if page.items.is_empty() {
            warning("⚠️  No entries found for the selected filters.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&page.items, path)?,
            ExportFormat::Json => export_json(&page.items, path)?,
        }

        audit_log(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} entries to {}", page.items.len(), file),
        )?;

        Ok(())
    }
}
