use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::{NamedTempFile, tempdir};

fn sample() -> Value {
    json!({
        "invoices": [
            {
                "id": 1, "number": "1", "client_id": 1, "amount": 100,
                "status": "paid", "created_at": "2024-02-03T09:00:00",
                "due_date": "2024-03-01", "items_count": 1
            },
            {
                "id": 2, "number": "2", "client_id": 2, "amount": "50.50",
                "status": "unpaid", "created_at": "2024-02-05 14:30:00",
                "due_date": "2024-02-01", "items_count": 2
            },
            {
                "id": 3, "number": "3", "client_id": 7, "amount": 200,
                "status": "paid", "created_at": "2024-01-20T18:00:00"
            },
            {
                "id": 4, "number": "draft", "amount": "abc",
                "status": "void", "created_at": "not a date"
            }
        ],
        "clients": [
            { "id": 1, "name": "Atlas SARL", "ice": "001" },
            { "id": 2, "name": "Rif Trading" }
        ]
    })
}

fn write_snapshot(contents: &Value) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create snapshot file");
    std::fs::write(file.path(), contents.to_string()).expect("Failed to write snapshot");
    file
}

fn invoicer(snapshot: &Path) -> Command {
    let mut cmd = Command::cargo_bin("invoicer").expect("Binary not found");
    cmd.arg("--snapshot")
        .arg(snapshot)
        .args(["--as-of", "2024-02-10"])
        .env("RUST_LOG", "off")
        .env_remove("INVOICER_SNAPSHOT")
        .env_remove("INVOICER_AS_OF");
    cmd
}

fn json_output(snapshot: &NamedTempFile, args: &[&str]) -> Value {
    let assert = invoicer(snapshot.path()).args(args).assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON")
}

#[test]
fn summary_counts_statuses_and_paid_revenue() {
    let snapshot = write_snapshot(&sample());
    let summary = json_output(&snapshot, &["summary"]);

    assert_eq!(summary["total_invoices"], 4);
    assert_eq!(summary["total_revenue"], 300.0);
    assert_eq!(summary["paid"], 2);
    assert_eq!(summary["unpaid"], 1);
    assert_eq!(summary["overdue"], 0);
}

#[test]
fn monthly_revenue_defaults_to_the_reporting_year() {
    let snapshot = write_snapshot(&sample());

    assert_eq!(
        json_output(&snapshot, &["monthly-revenue"]),
        json!({ "1": 200.0, "2": 100.0 })
    );
    assert_eq!(json_output(&snapshot, &["monthly-revenue", "--year", "2023"]), json!({}));
}

#[test]
fn trends_compare_against_the_previous_month() {
    let snapshot = write_snapshot(&sample());
    let trends = json_output(&snapshot, &["trends"]);

    assert_eq!(trends["total_invoices"], 100.0);
    assert_eq!(trends["total_revenue"], -50.0);
    assert_eq!(trends["paid"], 0.0);
    assert_eq!(trends["unpaid"], Value::Null);
    assert_eq!(trends["overdue"], Value::Null);
}

#[test]
fn overdue_sweep_targets_past_due_unpaid_invoices() {
    let snapshot = write_snapshot(&sample());

    assert_eq!(
        json_output(&snapshot, &["overdue"]),
        json!([{ "type": "mark_overdue", "invoice_id": 2, "as_of": "2024-02-10" }])
    );
}

#[test]
fn invoice_list_resolves_client_names() {
    let snapshot = write_snapshot(&sample());
    let rows = json_output(&snapshot, &["invoices", "--status", "paid"]);

    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["client_name"], "Atlas SARL");
    assert_eq!(rows[1]["id"], 3);
    assert_eq!(rows[1]["client_name"], "");
}

#[test]
fn dashboard_and_next_number() {
    let snapshot = write_snapshot(&sample());

    let view = json_output(&snapshot, &["dashboard", "--pretty"]);
    assert_eq!(view["summary"]["total_invoices"], 4);
    assert_eq!(view["months"]["current"]["total_invoices"], 2);
    assert_eq!(view["months"]["previous"]["total_revenue"], 200.0);
    assert_eq!(view["trends"]["total_revenue"], -50.0);

    // The most recent invoice has a non-numeric number; fall back to the
    // greatest numeric one.
    assert_eq!(
        json_output(&snapshot, &["next-number"]),
        json!({ "next_number": "4" })
    );
}

#[test]
fn missing_snapshot_fails_with_the_path() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("missing.json");

    invoicer(&missing)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("missing.json"));
}

#[test]
fn unknown_invoice_is_reported_as_not_found() {
    let snapshot = write_snapshot(&sample());

    invoicer(snapshot.path())
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(contains("not found: invoice 99"));
}
