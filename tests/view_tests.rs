mod common;
use common::pd_with;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_overview_full_selection() {
    pd_with("overview_full", &["view", "--view", "overview"])
        .assert()
        .success()
        .stdout(contains("📊 Excel Progress Dashboard"))
        .stdout(contains("Overall Overview"))
        .stdout(contains("↑ 70.0%"))
        .stdout(contains("↑ 30.0%"))
        .stdout(contains("7 (70%)"))
        .stdout(contains("3 (30%)"))
        .stdout(contains("Excel Sort & Filter"));
}

#[test]
fn test_overview_is_default_view() {
    pd_with("overview_default", &["view"])
        .assert()
        .success()
        .stdout(contains("Overall Overview"));
}

#[test]
fn test_overview_single_topic() {
    pd_with("overview_pivot", &["view", "--topic", "Pivot Table"])
        .assert()
        .success()
        .stdout(contains("Topics: Pivot Table"))
        .stdout(contains("100%"))
        .stdout(contains("33"))
        .stdout(contains("Data Analysis").not());
}

#[test]
fn test_overview_no_statuses_shows_placeholder() {
    pd_with("overview_no_status", &["view", "--no-statuses"])
        .assert()
        .success()
        .stdout(contains("No data for the current selection"))
        .stdout(contains("Status: (none)"));
}

#[test]
fn test_unknown_topic_is_reported() {
    pd_with("overview_unknown", &["view", "--topic", "Pivot Table", "--topic", "Nope"])
        .assert()
        .success()
        .stderr(contains("Unknown topic 'Nope'"))
        .stdout(contains("(no statistics for: Nope)"));
}

#[test]
fn test_topic_wise_ignores_filters() {
    let assert = pd_with("topics_ongoing", &["view", "--view", "topics", "--status", "ongoing"])
        .assert()
        .success()
        .stdout(contains("Topic-wise Progress Bars"))
        .stdout(contains("Data Analysis: 1/2 Completed (50.0%), 1/2 Ongoing (50.0%)"));

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(out.matches(" Completed (").count(), 8);
}

#[test]
fn test_table_ongoing_rows() {
    let assert = pd_with("table_ongoing", &["view", "--view", "table", "--status", "ongoing"])
        .assert()
        .success()
        .stdout(contains("Detailed Table View"))
        .stdout(contains("Data Analysis Part 2"))
        .stdout(contains("VBA and Macros Part 1"))
        .stdout(contains("Excel Dashboard Part 1"))
        .stdout(contains("Pivot Table Basic").not())
        .stdout(contains("VLookUp").not());

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let rows: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.contains("-+-"))
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.contains("Ongoing")));
}

#[test]
fn test_table_no_topics_shows_placeholder() {
    pd_with("table_no_topics", &["view", "--view", "table", "--no-topics"])
        .assert()
        .success()
        .stdout(contains("No data for the current selection"));
}

#[test]
fn test_invalid_status_is_rejected() {
    pd_with("bad_status", &["view", "--status", "paused"])
        .assert()
        .failure();
}

#[test]
fn test_topics_command() {
    pd_with("topics_cmd", &["topics"])
        .assert()
        .success()
        .stdout(contains("Conditional Formatting"))
        .stdout(contains("Excel Sort & Filter"))
        .stdout(contains("VBA and Macros"));
}
