mod common;
use common::{dt, seed_table, setup_table};
use daytally::utils::date::{table_date, today_minus};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_log_update_accrues_minutes() {
    let table = seed_table("log_update");

    let content = fs::read_to_string(&table).expect("read table");
    assert!(content.starts_with("Date|Objective|Summary|Coding|"));
    assert!(content.contains("1800.00"));
}

#[test]
fn test_log_update_twice_merges_one_row() {
    let table = seed_table("log_update_twice");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Coding", "--update", "30", "--yes",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&table).expect("read table");
    assert_eq!(content.lines().count(), 2, "one header + one row expected");
    assert!(content.contains("3600.00"));
    assert!(!content.contains("1800.00"));
}

#[test]
fn test_log_set_replaces_the_value() {
    let table = seed_table("log_set");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Coding", "--set", "10", "--yes",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&table).expect("read table");
    assert!(content.contains("600.00"));
    assert!(!content.contains("1800.00"));
}

#[test]
fn test_log_text_sets_metadata() {
    let table = setup_table("log_text");

    dt().args([
        "--test",
        "--file",
        &table,
        "log",
        "--key",
        "Summary",
        "--text",
        "Summary: wrote the parser",
        "--yes",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&table).expect("read table");
    assert!(content.contains("Summary: wrote the parser"));
}

#[test]
fn test_log_days_offset_keys_an_older_row() {
    let table = setup_table("log_days");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Misc", "--update", "5", "--days", "1",
        "--yes",
    ])
    .assert()
    .success();

    let yesterday = table_date(today_minus(1));
    let content = fs::read_to_string(&table).expect("read table");
    assert!(content.contains(&yesterday));
}

#[test]
fn test_log_unknown_key_lists_valid_keys() {
    let table = setup_table("log_unknown_key");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Golf", "--update", "5", "--yes",
    ])
    .assert()
    .failure()
    .stderr(
        predicate::str::contains("Unknown key 'Golf'")
            .and(predicate::str::contains("Coding"))
            .and(predicate::str::contains("Objective")),
    );

    assert!(!Path::new(&table).exists(), "nothing should be written");
}

#[test]
fn test_log_without_action_fails() {
    let table = setup_table("log_no_action");

    dt().args(["--test", "--file", &table, "log", "--key", "Coding", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--update or --set"));
}

#[test]
fn test_log_declined_confirmation_writes_nothing() {
    let table = setup_table("log_declined");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Coding", "--update", "30",
    ])
    .write_stdin("n\n")
    .assert()
    .success();

    assert!(!Path::new(&table).exists());
}

#[test]
fn test_log_backup_copies_the_table_aside() {
    let table = seed_table("log_backup");

    dt().args([
        "--test", "--file", &table, "log", "--key", "Coding", "--update", "5", "--backup",
        "--yes",
    ])
    .assert()
    .success();

    let backup = format!("{}.bak", table);
    assert!(Path::new(&backup).exists());

    // the backup holds the pre-modification value
    let content = fs::read_to_string(&backup).expect("read backup");
    assert!(content.contains("1800.00"));
}
