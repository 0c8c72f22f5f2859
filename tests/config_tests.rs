mod common;
use common::{pd, temp_config};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_config_print_defaults() {
    let cfg = temp_config("config_print");

    pd()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("page_title: Excel Progress Dashboard"))
        .stdout(contains("default_view: overview"));
}

#[test]
fn test_init_writes_config_once() {
    let cfg = temp_config("config_init");

    pd().args(["--config", &cfg, "init"]).assert().success();
    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("bar_width: 40"));

    pd().args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    pd().args(["--config", &cfg, "init", "--force"]).assert().success();
}

#[test]
fn test_config_check_reports_missing_keys() {
    let cfg = temp_config("config_check");
    fs::write(&cfg, "page_title: Mine\n").unwrap();

    pd().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Missing keys"))
        .stderr(contains("accent_progress"));
}

#[test]
fn test_config_changes_title_and_default_view() {
    let cfg = temp_config("config_custom");
    fs::write(&cfg, "page_title: My Skills\ndefault_view: table\n").unwrap();

    pd().args(["--config", &cfg, "--no-color", "view"])
        .assert()
        .success()
        .stdout(contains("📊 My Skills"))
        .stdout(contains("Detailed Table View"))
        .stdout(contains("Overall Overview").not());
}

#[test]
fn test_invalid_config_fails() {
    let cfg = temp_config("config_invalid");
    fs::write(&cfg, "bar_width: 0\n").unwrap();

    pd().args(["--config", &cfg, "view"])
        .assert()
        .failure()
        .stderr(contains("bar_width"));
}

#[test]
fn test_oversized_bar_width_fails() {
    let cfg = temp_config("config_bar_width");
    fs::write(&cfg, "bar_width: 100000000\n").unwrap();

    pd().args(["--config", &cfg, "view"])
        .assert()
        .failure()
        .stderr(contains("bar_width must be between 1 and 200"));
}
