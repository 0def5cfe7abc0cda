use crate::api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::lead_status::slugify;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Statuses { add, del, json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let name = name.trim();
            let slug = slugify(name);

            if name.is_empty() || slug.is_empty() {
                return Err(AppError::Validation(
                    "Status name must contain at least one letter or digit.".to_string(),
                ));
            }
            if queries::status_exists(&pool.conn, &slug)? {
                return Err(AppError::Validation(format!(
                    "Status '{slug}' already exists."
                )));
            }

            queries::insert_status(&pool.conn, &slug, name)?;
            audit_log(
                &pool.conn,
                "status",
                &slug,
                &format!("Added lead status '{name}'"),
            )?;
            success(format!("Added lead status '{name}' (slug: {slug})"));
            return Ok(());
        }

        if let Some(slug) = del {
            if !queries::status_exists(&pool.conn, slug)? {
                return Err(AppError::UnknownLeadStatus(slug.clone()));
            }

            queries::delete_status(&pool.conn, slug)?;
            audit_log(
                &pool.conn,
                "status",
                slug,
                &format!("Deleted lead status '{slug}'"),
            )?;
            success(format!("Deleted lead status '{slug}'"));
            warning("Entries assigned to it keep a dangling slug and show no status.");
            return Ok(());
        }

        if *json {
            let list = api::lead_statuses(&mut pool, cfg)?;
            let pretty = serde_json::to_string_pretty(&list)
                .map_err(|e| AppError::Other(format!("JSON encoding failed: {e}")))?;
            println!("{}", pretty);
            return Ok(());
        }

        let statuses = queries::load_statuses(&pool.conn)?;
        if statuses.is_empty() {
            println!("No lead statuses defined.");
            return Ok(());
        }

        println!("{}SLUG                 NAME                 COUNT{}", CYAN, RESET);
        for s in statuses {
            println!(
                "{:<20} {:<20} {}{}{}",
                s.slug, s.name, GREY, s.count, RESET
            );
        }
    }

    Ok(())
}
