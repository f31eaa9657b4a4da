#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dt() -> Command {
    cargo_bin_cmd!("daytally")
}

/// Create a unique activity-table path inside the system temp dir and remove
/// any existing file
pub fn setup_table(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daytally.csv", name));
    let table_path = path.to_string_lossy().to_string();
    fs::remove_file(&table_path).ok();
    fs::remove_file(format!("{}.bak", table_path)).ok();
    fs::remove_file(fancy_of(&table_path)).ok();
    table_path
}

/// Path of the formatted export written next to `table_path`
pub fn fancy_of(table_path: &str) -> String {
    let p = PathBuf::from(table_path);
    let stem = p.file_stem().unwrap().to_string_lossy().to_string();
    p.with_file_name(format!("{stem}_fancy.xlsx"))
        .to_string_lossy()
        .to_string()
}

/// Seed a table with 30 minutes of Coding for today
pub fn seed_table(name: &str) -> String {
    let table = setup_table(name);

    dt().args([
        "--test", "--file", &table, "log", "--key", "Coding", "--update", "30", "--yes",
    ])
    .assert()
    .success();

    table
}
