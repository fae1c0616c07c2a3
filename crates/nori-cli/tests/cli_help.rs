use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("nori")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("model-info"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("--backend"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("nori")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set-backend"));
}

#[test]
fn test_ask_requires_message() {
    cargo_bin_cmd!("nori")
        .arg("ask")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MESSAGE"));
}

#[test]
fn test_categories_lists_all_four() {
    cargo_bin_cmd!("nori")
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("travel"))
        .stdout(predicate::str::contains("investment"))
        .stdout(predicate::str::contains("legal"));
}
