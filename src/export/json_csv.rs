// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::summary::EntrySummary;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(items: &[EntrySummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(items)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. The edit target is a UI affordance, not data, so the
/// flat file keeps only the visible columns.
pub(crate) fn export_csv(items: &[EntrySummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record([
        "id",
        "title",
        "contact",
        "company",
        "date",
        "interaction_type",
        "lead_status",
    ])
    .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for item in items {
        wtr.write_record(&[
            item.id.to_string(),
            item.title.clone(),
            item.contact.clone(),
            item.company.clone(),
            item.date.clone(),
            item.interaction_type.clone(),
            item.lead_status.clone(),
        ])
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
