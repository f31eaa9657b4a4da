//! Tabular model of the persisted activity file.
//!
//! The file is pipe-delimited text, first line = header. Rows are kept as
//! strings; numeric interpretation is up to the callers. Columns are always
//! matched by name, never by position, so files written by newer versions
//! with extra columns keep round-tripping.

use crate::errors::AppResult;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

pub const DELIMITER: u8 = b'|';

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Parse the table at `path`. Short rows are padded so every row has one
    /// cell per header.
    pub fn read(path: &Path) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Rewrite the whole table at `path`, header first, `|`-separated.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of the column named `name`, adding it (and padding every row)
    /// when missing. This is the explicit union/merge step: record keys
    /// unknown to an existing file grow the header instead of failing.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// First row whose cell in `column` equals `value`.
    pub fn find_row(&self, column: usize, value: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.get(column).is_some_and(|cell| cell == value))
    }

    /// Append an empty row and return its index.
    pub fn push_empty_row(&mut self) -> usize {
        self.rows.push(vec![String::new(); self.headers.len()]);
        self.rows.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: String) {
        if let Some(r) = self.rows.get_mut(row)
            && let Some(c) = r.get_mut(column)
        {
            *c = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("{name}_daytally_table.csv"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn round_trips_header_and_rows() {
        let path = scratch("round_trip");
        let mut t = Table::new(vec!["Date".into(), "Coding".into()]);
        let r = t.push_empty_row();
        t.set_cell(r, 0, "01/01/2024".into());
        t.set_cell(r, 1, "3600.00".into());
        t.write(&path).unwrap();

        let read = Table::read(&path).unwrap();
        assert_eq!(read.headers(), &["Date".to_string(), "Coding".to_string()]);
        assert_eq!(read.cell(0, 1), Some("3600.00"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn short_rows_are_padded() {
        let path = scratch("short_rows");
        fs::write(&path, "Date|Objective|Coding\n01/01/2024|Objective:\n").unwrap();

        let t = Table::read(&path).unwrap();
        assert_eq!(t.cell(0, 2), Some(""));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn ensure_column_grows_header_and_rows() {
        let mut t = Table::new(vec!["Date".into()]);
        t.push_empty_row();

        let idx = t.ensure_column("Reading");
        assert_eq!(idx, 1);
        assert_eq!(t.cell(0, 1), Some(""));

        // already present: same index, no growth
        assert_eq!(t.ensure_column("Reading"), 1);
        assert_eq!(t.headers().len(), 2);
    }

    #[test]
    fn find_row_matches_by_cell_value() {
        let mut t = Table::new(vec!["Date".into()]);
        let r0 = t.push_empty_row();
        t.set_cell(r0, 0, "01/01/2024".into());
        let r1 = t.push_empty_row();
        t.set_cell(r1, 0, "02/01/2024".into());

        assert_eq!(t.find_row(0, "02/01/2024"), Some(1));
        assert_eq!(t.find_row(0, "03/01/2024"), None);
    }
}
