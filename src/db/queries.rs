use crate::db::query::EntryQuery;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::interaction_type::InteractionType;
use crate::models::lead_status::LeadStatus;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let type_str: String = row.get("interaction_type")?;
    let interaction_type = InteractionType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidInteractionType(type_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        title: row.get("title")?,
        contact_name: row.get("contact_name")?,
        company: row.get("company")?,
        date,
        interaction_type,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (title, contact_name, company, date, interaction_type, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.title,
            entry.contact_name,
            entry.company,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.interaction_type.to_db_str(),
            entry.notes,
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full re-save of every editable field; the title is already re-derived.
pub fn update_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries
         SET title = ?1, contact_name = ?2, company = ?3,
             date = ?4, interaction_type = ?5, notes = ?6
         WHERE id = ?7",
        params![
            entry.title,
            entry.contact_name,
            entry.company,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.interaction_type.to_db_str(),
            entry.notes,
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NoSuchEntry(entry.id));
    }
    Ok(())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, contact_name, company, date, interaction_type, notes, created_at
         FROM entries WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM entry_status WHERE entry_id = ?1", [id])?;
    conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(())
}

pub fn count_entries(conn: &Connection, query: &EntryQuery) -> AppResult<i64> {
    let mut stmt = conn.prepare(&query.count_sql())?;
    let total = stmt.query_row(params_from_iter(query.params().iter()), |row| row.get(0))?;
    Ok(total)
}

pub fn load_entry_page(conn: &Connection, query: &EntryQuery) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&query.page_sql())?;
    let rows = stmt.query_map(params_from_iter(query.params().iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Lead statuses
// ---------------------------------------------------------------------------

pub fn load_statuses(conn: &Connection) -> AppResult<Vec<LeadStatus>> {
    let mut stmt =
        conn.prepare_cached("SELECT slug, name, count FROM lead_statuses ORDER BY name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LeadStatus {
            slug: row.get(0)?,
            name: row.get(1)?,
            count: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn status_exists(conn: &Connection, slug: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM lead_statuses WHERE slug = ?1")?;
    Ok(stmt.query_row([slug], |_| Ok(())).optional()?.is_some())
}

pub fn insert_status(conn: &Connection, slug: &str, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO lead_statuses (slug, name, count) VALUES (?1, ?2, 0)",
        [slug, name],
    )?;
    Ok(())
}

/// Remove a status from the vocabulary. Junction rows pointing at it are
/// left in place: they simply stop resolving to a display name.
pub fn delete_status(conn: &Connection, slug: &str) -> AppResult<()> {
    conn.execute("DELETE FROM lead_statuses WHERE slug = ?1", [slug])?;
    Ok(())
}

/// Display name of the first status assigned to an entry, if any.
///
/// The store should hold at most one assignment per entry; if a foreign
/// writer left more than one, the oldest wins.
pub fn first_status_name(conn: &Connection, entry_id: i64) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT s.name
         FROM entry_status es
         JOIN lead_statuses s ON s.slug = es.status_slug
         WHERE es.entry_id = ?1
         ORDER BY es.id ASC
         LIMIT 1",
    )?;
    Ok(stmt.query_row([entry_id], |row| row.get(0)).optional()?)
}

/// Status slugs currently attached to an entry, oldest first.
pub fn status_slugs_for_entry(conn: &Connection, entry_id: i64) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT status_slug FROM entry_status WHERE entry_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([entry_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace an entry's status assignment. `None` clears it.
pub fn set_entry_status(conn: &Connection, entry_id: i64, slug: Option<&str>) -> AppResult<()> {
    conn.execute("DELETE FROM entry_status WHERE entry_id = ?1", [entry_id])?;

    if let Some(slug) = slug {
        conn.execute(
            "INSERT INTO entry_status (entry_id, status_slug) VALUES (?1, ?2)",
            params![entry_id, slug],
        )?;
    }
    Ok(())
}

/// Recompute the maintained count for one status slug.
pub fn refresh_status_count(conn: &Connection, slug: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE lead_statuses
         SET count = (SELECT COUNT(*) FROM entry_status WHERE status_slug = ?1)
         WHERE slug = ?1",
        [slug],
    )?;
    Ok(())
}
