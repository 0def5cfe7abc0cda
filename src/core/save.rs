use crate::db::log::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::interaction_type::InteractionType;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::derive_title;
use chrono::Local;

/// Raw user input for a save; everything still unvalidated text.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    /// `Some` re-saves an existing entry, `None` creates one.
    pub id: Option<i64>,
    pub contact: String,
    pub company: String,
    pub date: String,
    pub interaction_type: String,
    pub notes: String,
    /// `Some("")` clears the status; `None` leaves it untouched on edit.
    pub lead_status: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct SaveLogic;

impl SaveLogic {
    /// Validate, derive the title, write the entry and its status
    /// assignment. Returns the entry id.
    ///
    /// Validation collects every violation and reports them together
    /// instead of stopping at the first one.
    pub fn apply(pool: &mut DbPool, req: &SaveRequest) -> AppResult<i64> {
        let mut problems: Vec<String> = Vec::new();

        let contact = req.contact.trim();
        if contact.is_empty() {
            problems.push("Contact name is required.".to_string());
        }

        let parsed_date = date::parse_date(req.date.trim());
        if parsed_date.is_none() {
            problems.push(format!(
                "Interaction date '{}' is not a valid YYYY-MM-DD date.",
                req.date.trim()
            ));
        }

        let interaction_type = InteractionType::from_db_str(req.interaction_type.trim());
        if interaction_type.is_none() {
            problems.push(format!(
                "Unknown interaction type '{}'. Use one of: email, video_call, in_person, phone_call.",
                req.interaction_type.trim()
            ));
        }

        if !problems.is_empty() {
            return Err(AppError::Validation(problems.join(" ")));
        }

        // Both checked above.
        let entry_date = parsed_date.ok_or_else(|| AppError::InvalidDate(req.date.clone()))?;
        let interaction_type = interaction_type
            .ok_or_else(|| AppError::InvalidInteractionType(req.interaction_type.clone()))?;

        let company = req.company.trim().to_string();
        let title = derive_title(contact, &company, entry_date);

        let entry = Entry {
            id: req.id.unwrap_or(0),
            title,
            contact_name: contact.to_string(),
            company,
            date: entry_date,
            interaction_type,
            notes: req.notes.trim().to_string(),
            created_at: Local::now().to_rfc3339(),
        };

        let (id, operation) = match req.id {
            None => (queries::insert_entry(&pool.conn, &entry)?, "add"),
            Some(id) => {
                if queries::load_entry(&pool.conn, id)?.is_none() {
                    return Err(AppError::NoSuchEntry(id));
                }
                queries::update_entry(&pool.conn, &entry)?;
                (id, "edit")
            }
        };

        Self::apply_status(pool, id, req.lead_status.as_deref())?;

        audit_log(
            &pool.conn,
            operation,
            &id.to_string(),
            &format!("{} entry '{}'", operation, entry.title),
        )?;
        success(format!("Entry #{} saved: {}", id, entry.title));

        Ok(id)
    }

    /// Replace the status assignment and refresh the maintained counts
    /// of every slug touched. An empty slug clears the assignment.
    fn apply_status(pool: &mut DbPool, entry_id: i64, status: Option<&str>) -> AppResult<()> {
        let Some(raw) = status else {
            return Ok(());
        };

        let slug = raw.trim();
        let mut touched = queries::status_slugs_for_entry(&pool.conn, entry_id)?;

        if slug.is_empty() {
            queries::set_entry_status(&pool.conn, entry_id, None)?;
        } else {
            if !queries::status_exists(&pool.conn, slug)? {
                return Err(AppError::UnknownLeadStatus(slug.to_string()));
            }
            queries::set_entry_status(&pool.conn, entry_id, Some(slug))?;
            touched.push(slug.to_string());
        }

        touched.sort();
        touched.dedup();
        for s in touched {
            queries::refresh_status_count(&pool.conn, &s)?;
        }

        Ok(())
    }
}
