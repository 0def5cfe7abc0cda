pub mod add;
pub mod browse;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod statuses;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filter::FilterRequest;
use crate::models::interaction_type::InteractionType;
use crate::utils::date;

/// Shared between `list` and `export`: turn raw filter arguments into a
/// validated FilterRequest.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_filter(
    cfg: &Config,
    search: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    interaction_type: &Option<String>,
    status: &Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AppResult<FilterRequest> {
    let start_date = match from {
        Some(raw) => {
            Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?)
        }
        None => None,
    };

    let end_date = match to {
        Some(raw) => {
            Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?)
        }
        None => None,
    };

    let parsed_type = match interaction_type {
        Some(raw) => Some(
            InteractionType::from_db_str(raw)
                .ok_or_else(|| AppError::InvalidInteractionType(raw.clone()))?,
        ),
        None => None,
    };

    FilterRequest {
        term: search.clone(),
        start_date,
        end_date,
        interaction_type: parsed_type,
        lead_status: status.clone(),
        page: page.unwrap_or(1),
        per_page: per_page.unwrap_or(cfg.per_page),
    }
    .validated()
}
