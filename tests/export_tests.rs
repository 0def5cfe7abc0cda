mod common;
use common::{gl, init_db_with_data, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,title,contact,company,date,interaction_type,lead_status"));
    assert!(content.contains("Jane Doe"));
    assert!(content.contains("Jun 1, 2025"));
    assert!(content.contains("Qualified"));
}

#[test]
fn test_export_json_carries_the_edit_target() {
    let db_path = setup_test_db("export_json_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_all", "json");

    gl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("edit_url"));
    assert!(content.contains("guildledger://entry/"));
    assert!(content.contains("Jane Doe"));
}

#[test]
fn test_export_respects_the_active_filters() {
    let db_path = setup_test_db("export_filtered");
    init_db_with_data(&db_path);

    let out = temp_out("export_filtered", "csv");

    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--search", "acme",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Jane Doe"));
    assert!(content.contains("Ana Gomez"));
    assert!(!content.contains("John Smith"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", "relative_out.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_with_no_matches_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty", "csv");

    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--search", "zzzzzz",
    ])
    .assert()
    .success()
    .stdout(contains("No entries found for the selected filters"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_an_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Jane Doe"));
    assert!(!content.contains("stale"));
}

#[test]
fn test_export_inverted_range_is_rejected() {
    let db_path = setup_test_db("export_inverted");
    init_db_with_data(&db_path);

    let out = temp_out("export_inverted", "csv");

    gl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--from",
        "2025-06-30",
        "--to",
        "2025-06-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date range"));
}

#[test]
fn test_export_is_recorded_in_the_internal_log() {
    let db_path = setup_test_db("export_logged");
    init_db_with_data(&db_path);

    let out = temp_out("export_logged", "json");

    gl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    gl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("export"))
        .stdout(contains("Exported 3 entries"));
}
