mod common;
use common::{dt, seed_table, setup_table};
use predicates::prelude::*;

#[test]
fn test_status_shows_accrued_times() {
    let table = seed_table("status_times");

    dt().args(["--test", "--file", &table, "status"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Coding")
                .and(predicate::str::contains("0 hours, 30 minutes, 0 seconds"))
                .and(predicate::str::contains("Total")),
        );
}

#[test]
fn test_status_on_a_fresh_day_shows_zeroes() {
    let table = setup_table("status_fresh");

    dt().args(["--test", "--file", &table, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 hours, 0 minutes, 0 seconds"));
}
