use crate::models::lead_status::{DEFAULT_STATUSES, slugify};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `lead_statuses` has the maintained `count` column.
fn statuses_have_count_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('lead_statuses')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "count" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the current schema.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            title             TEXT NOT NULL,
            contact_name      TEXT NOT NULL,
            company           TEXT NOT NULL DEFAULT '',
            date              TEXT NOT NULL,
            interaction_type  TEXT NOT NULL
                CHECK(interaction_type IN ('email','video_call','in_person','phone_call')),
            notes             TEXT NOT NULL DEFAULT '',
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_type ON entries(interaction_type);
        "#,
    )?;
    Ok(())
}

/// Create the status vocabulary and the entry↔status junction table.
fn create_status_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lead_statuses (
            slug  TEXT PRIMARY KEY,
            name  TEXT NOT NULL,
            count INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS entry_status (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_id    INTEGER NOT NULL,
            status_slug TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entry_status_entry ON entry_status(entry_id);
        CREATE INDEX IF NOT EXISTS idx_entry_status_slug ON entry_status(status_slug);
        "#,
    )?;
    Ok(())
}

/// Legacy databases stored statuses without a maintained count.
fn migrate_add_count_to_statuses(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "lead_statuses")? || statuses_have_count_column(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE lead_statuses ADD COLUMN count INTEGER NOT NULL DEFAULT 0;

        UPDATE lead_statuses
           SET count = (SELECT COUNT(*) FROM entry_status
                        WHERE entry_status.status_slug = lead_statuses.slug);
        "#,
    )?;

    success("Added maintained 'count' column to lead_statuses.");
    Ok(())
}

/// Seed the default status vocabulary exactly once.
///
/// The marker row in `log` keeps a later re-run of the migrations from
/// resurrecting defaults the user has deliberately deleted.
fn seed_default_statuses(conn: &Connection) -> Result<()> {
    let marker = "seed_default_statuses";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([marker], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    for name in DEFAULT_STATUSES {
        conn.execute(
            "INSERT OR IGNORE INTO lead_statuses (slug, name, count) VALUES (?1, ?2, 0)",
            [slugify(name).as_str(), name],
        )?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Seeded default lead statuses')",
        [marker],
    )?;

    success("Seeded default lead statuses (New, Contacted, Qualified, Converted, Lost).");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    if !table_exists(conn, "entries")? {
        create_entries_table(conn)?;
        success("Created entries table.");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
            CREATE INDEX IF NOT EXISTS idx_entries_type ON entries(interaction_type);
            "#,
        )?;
    }

    // 3) Status vocabulary + junction
    create_status_tables(conn)?;
    migrate_add_count_to_statuses(conn)?;

    // 4) One-time seeding
    seed_default_statuses(conn)?;

    Ok(())
}
