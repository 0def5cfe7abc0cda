//! Read-only query surface: parameter maps in, JSON envelopes out.
//!
//! Parameter names and response shapes are shared with the `--json`
//! CLI outputs and the interactive browser. Store faults never leak
//! their detail here; callers get one generic message and the root
//! cause goes to the internal log when `debug` is enabled.

use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::stats::{StatsCache, StatsLogic};
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::filter::FilterRequest;
use crate::models::interaction_type::InteractionType;
use crate::utils::date;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Instant;

pub type Params = HashMap<String, String>;

/// Build a FilterRequest from query-style parameters.
///
/// Recognized keys: `s`, `start_date`, `end_date`, `interaction_type`,
/// `lead_status`, `per_page`, `page`. Unknown keys are ignored;
/// malformed values are validation errors, not server errors.
pub fn filter_from_params(params: &Params, cfg: &Config) -> AppResult<FilterRequest> {
    let mut filter = FilterRequest {
        per_page: cfg.per_page,
        ..Default::default()
    };

    if let Some(s) = params.get("s") {
        filter.term = Some(s.clone());
    }

    if let Some(raw) = params.get("start_date") {
        filter.start_date =
            Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?);
    }

    if let Some(raw) = params.get("end_date") {
        filter.end_date =
            Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?);
    }

    if let Some(raw) = params.get("interaction_type") {
        filter.interaction_type = Some(
            InteractionType::from_db_str(raw)
                .ok_or_else(|| AppError::InvalidInteractionType(raw.clone()))?,
        );
    }

    if let Some(raw) = params.get("lead_status") {
        filter.lead_status = Some(raw.clone());
    }

    if let Some(raw) = params.get("per_page") {
        filter.per_page = raw
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid per_page value '{raw}'")))?;
    }

    if let Some(raw) = params.get("page") {
        filter.page = raw
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid page value '{raw}'")))?;
    }

    filter.validated()
}

/// `entries` operation: `{ items, total, pages }`.
pub fn entries(pool: &mut DbPool, cfg: &Config, params: &Params) -> AppResult<Value> {
    let filter = filter_from_params(params, cfg)?;

    match ListLogic::list(pool, &filter) {
        Ok(page) => Ok(json!({
            "items": page.items,
            "total": page.total,
            "pages": page.pages,
        })),
        Err(e) => Err(server_error(
            pool,
            cfg,
            "entries",
            e,
            "Server error while listing entries",
        )),
    }
}

/// `lead-statuses` operation: `[{ slug, name }]`.
pub fn lead_statuses(pool: &mut DbPool, cfg: &Config) -> AppResult<Value> {
    match queries::load_statuses(&pool.conn) {
        Ok(statuses) => {
            let items: Vec<Value> = statuses
                .iter()
                .map(|s| json!({ "slug": s.slug, "name": s.name }))
                .collect();
            Ok(Value::Array(items))
        }
        Err(e) => Err(server_error(
            pool,
            cfg,
            "lead-statuses",
            e,
            "Server error while listing lead statuses",
        )),
    }
}

/// `stats` operation: `{ by_type, by_status, by_month }`, served through
/// the snapshot cache.
pub fn stats(pool: &mut DbPool, cfg: &Config, cache: &StatsCache) -> AppResult<Value> {
    let computed = cache.fetch(Instant::now(), || StatsLogic::compute(pool));

    match computed {
        Ok(snapshot) => Ok(json!(snapshot)),
        Err(e) => Err(server_error(
            pool,
            cfg,
            "stats",
            e,
            "Server error while computing stats",
        )),
    }
}

/// Swallow the root cause into the internal log (debug only) and hand
/// the caller a generic message.
fn server_error(
    pool: &mut DbPool,
    cfg: &Config,
    target: &str,
    cause: AppError,
    message: &str,
) -> AppError {
    if cfg.debug {
        let _ = audit_log(&pool.conn, "error", target, &cause.to_string());
    }
    AppError::Server(message.to_string())
}
