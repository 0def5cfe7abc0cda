mod common;
use common::{gl, init_db_with_data, populate_many_entries, setup_test_db};
use serde_json::Value;

/// Run a command and parse its stdout as JSON.
fn json_stdout(args: &[&str]) -> Value {
    let out = gl().args(args).assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    serde_json::from_str(stdout.trim()).expect("valid JSON on stdout")
}

#[test]
fn test_entries_json_envelope_shape() {
    let db_path = setup_test_db("api_envelope");
    init_db_with_data(&db_path);

    let v = json_stdout(&["--db", &db_path, "list", "--json"]);

    assert!(v.get("items").is_some());
    assert_eq!(v["total"], 3);
    assert_eq!(v["pages"], 1);

    let items = v["items"].as_array().expect("items is an array");
    assert_eq!(items.len(), 3);

    // Every row carries the summary fields the browser renders
    let first = &items[0];
    for key in [
        "id",
        "title",
        "edit_url",
        "contact",
        "company",
        "date",
        "interaction_type",
        "lead_status",
    ] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }

    let id = first["id"].as_i64().expect("numeric id");
    assert_eq!(
        first["edit_url"],
        format!("guildledger://entry/{id}/edit")
    );
}

#[test]
fn test_entries_json_rows_use_display_dates_and_status_names() {
    let db_path = setup_test_db("api_display");
    init_db_with_data(&db_path);

    let v = json_stdout(&["--db", &db_path, "list", "--json", "--search", "jane"]);
    let items = v["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);

    assert_eq!(items[0]["date"], "Jun 1, 2025");
    assert_eq!(items[0]["lead_status"], "Qualified");
    assert_eq!(items[0]["interaction_type"], "email");
}

#[test]
fn test_entries_json_pagination() {
    let db_path = setup_test_db("api_pagination");
    populate_many_entries(&db_path, 25);

    let v = json_stdout(&[
        "--db", &db_path, "list", "--json", "--per-page", "10", "--page", "2",
    ]);

    assert_eq!(v["total"], 25);
    assert_eq!(v["pages"], 3);
    assert_eq!(v["items"].as_array().expect("items").len(), 10);

    // Last page holds the remainder
    let v = json_stdout(&[
        "--db", &db_path, "list", "--json", "--per-page", "10", "--page", "3",
    ]);
    assert_eq!(v["items"].as_array().expect("items").len(), 5);

    // A page past the end is valid and empty
    let v = json_stdout(&[
        "--db", &db_path, "list", "--json", "--per-page", "10", "--page", "9",
    ]);
    assert_eq!(v["total"], 25);
    assert_eq!(v["items"].as_array().expect("items").len(), 0);
}

#[test]
fn test_entries_json_type_filter_pages_by_sort_order() {
    let db_path = setup_test_db("api_type_paging");
    populate_many_entries(&db_path, 3);

    let v = json_stdout(&[
        "--db",
        &db_path,
        "list",
        "--json",
        "--type",
        "email",
        "--per-page",
        "1",
        "--page",
        "2",
    ]);

    assert_eq!(v["total"], 3);
    assert_eq!(v["pages"], 3);
    let items = v["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    // Newest first: Contact 2 (Mar 3), Contact 1 (Mar 2), Contact 0 (Mar 1)
    assert_eq!(items[0]["contact"], "Contact 1");
}

#[test]
fn test_entries_json_filters_apply() {
    let db_path = setup_test_db("api_filters");
    init_db_with_data(&db_path);

    let v = json_stdout(&[
        "--db", &db_path, "list", "--json", "--type", "video_call",
    ]);
    assert_eq!(v["total"], 1);
    assert_eq!(
        v["items"].as_array().expect("items")[0]["contact"],
        "John Smith"
    );

    let v = json_stdout(&[
        "--db", &db_path, "list", "--json", "--status", "qualified",
    ]);
    assert_eq!(v["total"], 1);
    assert_eq!(
        v["items"].as_array().expect("items")[0]["contact"],
        "Jane Doe"
    );
}

#[test]
fn test_lead_statuses_json_list() {
    let db_path = setup_test_db("api_statuses");
    init_db_with_data(&db_path);

    let v = json_stdout(&["--db", &db_path, "statuses", "--json"]);
    let items = v.as_array().expect("array of statuses");
    assert_eq!(items.len(), 5);

    let slugs: Vec<&str> = items
        .iter()
        .map(|s| s["slug"].as_str().expect("slug"))
        .collect();
    assert!(slugs.contains(&"qualified"));
    assert!(items.iter().all(|s| s.get("name").is_some()));
}

#[test]
fn test_stats_json_snapshot() {
    let db_path = setup_test_db("api_stats");
    init_db_with_data(&db_path);

    let v = json_stdout(&["--db", &db_path, "stats", "--json"]);

    // by_type always lists every interaction type, zero-filled
    let by_type = v["by_type"].as_object().expect("by_type map");
    assert_eq!(by_type.len(), 4);
    assert_eq!(by_type["email"], 1);
    assert_eq!(by_type["video_call"], 1);
    assert_eq!(by_type["phone_call"], 1);
    assert_eq!(by_type["in_person"], 0);

    // by_status uses display names and the maintained counts
    let by_status = v["by_status"].as_object().expect("by_status map");
    assert_eq!(by_status["Qualified"], 1);
    assert_eq!(by_status["New"], 1);
    assert_eq!(by_status["Lost"], 0);

    // by_month is exactly twelve calendar buckets, oldest first
    let by_month = v["by_month"].as_object().expect("by_month map");
    assert_eq!(by_month.len(), 12);
    let keys: Vec<&String> = by_month.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "month keys sort chronologically");
    for key in keys {
        assert_eq!(key.len(), 7, "YYYY-MM key: {key}");
        assert_eq!(&key[4..5], "-");
    }
}

#[test]
fn test_stats_table_output_uses_fixed_type_order() {
    let db_path = setup_test_db("api_stats_table");
    init_db_with_data(&db_path);

    let out = gl().args(["--db", &db_path, "stats"]).assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();

    let email = stdout.find("Email").expect("Email row");
    let video = stdout.find("Video Call").expect("Video Call row");
    let in_person = stdout.find("In Person").expect("In Person row");
    let phone = stdout.find("Phone Call").expect("Phone Call row");
    assert!(email < video && video < in_person && in_person < phone);
}
