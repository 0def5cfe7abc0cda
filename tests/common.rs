#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gl() -> Command {
    cargo_bin_cmd!("guildledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guildledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables and seeds the default statuses)
    gl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    gl().args([
        "--db",
        db_path,
        "add",
        "2025-06-01",
        "Jane Doe",
        "--company",
        "Acme Corp",
        "--type",
        "email",
        "--notes",
        "Quarterly check-in",
        "--status",
        "qualified",
    ])
    .assert()
    .success();

    gl().args([
        "--db",
        db_path,
        "add",
        "2025-06-15",
        "John Smith",
        "--company",
        "Globex",
        "--type",
        "video_call",
        "--status",
        "new",
    ])
    .assert()
    .success();

    gl().args([
        "--db",
        db_path,
        "add",
        "2025-05-20",
        "Ana Gomez",
        "--company",
        "Acme Ltd",
        "--type",
        "phone_call",
    ])
    .assert()
    .success();
}

/// Populate many entries directly via the library DB API for pagination tests
pub fn populate_many_entries(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    guildledger::db::initialize::init_db(&conn).expect("init db");

    for i in 0..n {
        let day = (i % 28) + 1; // 1..28
        let date = NaiveDate::from_ymd_opt(2025, 3, day as u32).expect("date");
        let entry = guildledger::models::entry::Entry {
            id: 0,
            title: guildledger::utils::formatting::derive_title(
                &format!("Contact {i}"),
                "Bulk Inc",
                date,
            ),
            contact_name: format!("Contact {i}"),
            company: "Bulk Inc".to_string(),
            date,
            interaction_type: guildledger::models::interaction_type::InteractionType::Email,
            notes: String::new(),
            created_at: chrono::Local::now().to_rfc3339(),
        };
        guildledger::db::queries::insert_entry(&conn, &entry).expect("insert entry");
    }
}
