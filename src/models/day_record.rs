//! In-memory representation of one tracked day.
//!
//! A `DayRecord` accrues seconds per activity category, carries free-text
//! metadata (Objective, Summary), and merges itself into the pipe-delimited
//! activity table keyed by its `DD/MM/YYYY` date.

use crate::errors::{AppError, AppResult};
use crate::store::Table;
use crate::utils::date;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Default category set of the batch variant.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Coding", "Reading", "Writing", "Contact", "Misc"];

const DATE_COLUMN: &str = "Date";

/// Whether a key names an activity category or a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Category,
    Metadata,
}

#[derive(Debug)]
pub struct DayRecord {
    // insertion-ordered: the column layout of a fresh table follows it
    categories: Vec<(String, f64)>,
    metadata: Vec<(String, String)>,
    selected: Option<String>,
    date: String,
    file: Option<PathBuf>,
    last_path_file: Option<PathBuf>,
}

impl DayRecord {
    /// Build a record for today minus `day_offset` days.
    ///
    /// When `last_path_file` points at an existing side file, its single
    /// line is taken as the table path and the matching row (if any) is
    /// loaded over the defaults. Recovery never fails: unreadable files
    /// leave the record at its defaults.
    pub fn create(
        keys: &[String],
        last_path_file: Option<PathBuf>,
        day_offset: u32,
    ) -> Self {
        let mut record = Self::with_date(keys, last_path_file, date::today_minus(day_offset));

        if let Some(side) = record.last_path_file.clone()
            && let Ok(line) = fs::read_to_string(&side)
        {
            let remembered = line.trim();
            if !remembered.is_empty() {
                record.set_file(PathBuf::from(remembered));
            }
        }

        record
    }

    fn with_date(keys: &[String], last_path_file: Option<PathBuf>, date: NaiveDate) -> Self {
        let categories = keys.iter().map(|k| (k.clone(), 0.0)).collect();
        let metadata = ["Objective", "Summary"]
            .into_iter()
            .map(|k| (k.to_string(), format!("{k}:")))
            .collect();

        Self {
            categories,
            metadata,
            selected: None,
            date: date::table_date(date),
            file: None,
            last_path_file,
        }
    }

    /// Point the record at a table file; when the file exists its row for
    /// this date (if any) replaces the in-memory defaults.
    pub fn set_file(&mut self, path: PathBuf) {
        if path.as_os_str().is_empty() {
            return;
        }
        if path.is_file() {
            self.load(&path);
        }
        self.file = Some(path);
    }

    /// Merge the row whose `Date` matches this record from the table at
    /// `path`. Fails silently: a missing or malformed file, or a file with
    /// no row for this date, leaves the defaults in place (first run of the
    /// day).
    pub fn load(&mut self, path: &Path) {
        let Ok(table) = Table::read(path) else {
            return;
        };
        let Some(date_col) = table.column(DATE_COLUMN) else {
            return;
        };
        let Some(row) = table.find_row(date_col, &self.date) else {
            return;
        };

        for (col, header) in table.headers().iter().enumerate() {
            if col == date_col {
                continue;
            }
            let Some(cell) = table.cell(row, col) else {
                continue;
            };

            if let Some(value) = self.category_mut(header) {
                // an unparsable number leaves the current value untouched
                if let Ok(secs) = cell.parse::<f64>() {
                    *value = secs;
                }
            } else {
                // any unrecognized column round-trips through metadata
                self.set_meta_raw(header, cell.to_string());
            }
        }
    }

    /// Accrue elapsed seconds onto the selected category. No-op while no
    /// timer is running.
    pub fn update(&mut self, elapsed_seconds: f64) {
        if let Some(selected) = self.selected.clone()
            && let Some(value) = self.category_mut(&selected)
        {
            *value += elapsed_seconds;
        }
    }

    /// Add whole or fractional minutes to a category, regardless of which
    /// timer (if any) is running.
    pub fn add_minutes(&mut self, key: &str, minutes: f64) -> AppResult<()> {
        match self.category_mut(key) {
            Some(value) => {
                *value += minutes * 60.0;
                Ok(())
            }
            None => Err(self.unknown_key(key)),
        }
    }

    /// Set a category to an absolute number of minutes.
    pub fn set_minutes(&mut self, key: &str, minutes: f64) -> AppResult<()> {
        match self.category_mut(key) {
            Some(value) => {
                *value = minutes * 60.0;
                Ok(())
            }
            None => Err(self.unknown_key(key)),
        }
    }

    /// Start timing `key`, or stop the running timer with `None`.
    pub fn select(&mut self, key: Option<&str>) -> AppResult<()> {
        match key {
            Some(k) => {
                if self.category_mut(k).is_none() {
                    return Err(self.unknown_key(k));
                }
                self.selected = Some(k.to_string());
                Ok(())
            }
            None => {
                self.selected = None;
                Ok(())
            }
        }
    }

    pub fn stop(&mut self) {
        self.selected = None;
    }

    /// Overwrite a metadata field. Unknown keys are an error here; only
    /// `load` may grow the metadata set (from file columns).
    pub fn set_meta(&mut self, key: &str, text: String) -> AppResult<()> {
        match self.metadata.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                *v = text;
                Ok(())
            }
            None => Err(self.unknown_key(key)),
        }
    }

    fn set_meta_raw(&mut self, key: &str, text: String) {
        match self.metadata.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = text,
            None => self.metadata.push((key.to_string(), text)),
        }
    }

    /// Merge this record into the table at its file path: update the row for
    /// this date in place, or append exactly one new row. Missing columns
    /// are added to the header (union by name); columns this record does not
    /// know keep their cells. Afterwards the table path is remembered in the
    /// side file.
    pub fn save(&self) -> AppResult<()> {
        let path = self.file.clone().ok_or(AppError::NoTableFile)?;

        let mut table = if path.is_file() {
            Table::read(&path)?
        } else {
            Table::new(vec![DATE_COLUMN.to_string()])
        };

        let date_col = table.ensure_column(DATE_COLUMN);
        let row = match table.find_row(date_col, &self.date) {
            Some(row) => row,
            None => {
                let row = table.push_empty_row();
                table.set_cell(row, date_col, self.date.clone());
                row
            }
        };

        for (key, text) in &self.metadata {
            let col = table.ensure_column(key);
            table.set_cell(row, col, text.clone());
        }
        for (key, seconds) in &self.categories {
            let col = table.ensure_column(key);
            table.set_cell(row, col, format!("{seconds:.2}"));
        }

        table.write(&path)?;
        self.remember_path(&path)?;

        Ok(())
    }

    fn remember_path(&self, table_path: &Path) -> AppResult<()> {
        if let Some(side) = &self.last_path_file {
            if let Some(parent) = side.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(side, table_path.to_string_lossy().as_bytes())?;
        }
        Ok(())
    }

    fn category_mut(&mut self, key: &str) -> Option<&mut f64> {
        self.categories
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn unknown_key(&self, key: &str) -> AppError {
        AppError::UnknownKey {
            key: key.to_string(),
            valid: self.valid_keys().join(", "),
        }
    }

    /// Category names followed by metadata names, in column order.
    pub fn valid_keys(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|(k, _)| k.as_str())
            .chain(self.metadata.iter().map(|(k, _)| k.as_str()))
            .collect()
    }

    pub fn key_kind(&self, key: &str) -> Option<KeyKind> {
        if self.categories.iter().any(|(k, _)| k == key) {
            Some(KeyKind::Category)
        } else if self.metadata.iter().any(|(k, _)| k == key) {
            Some(KeyKind::Metadata)
        } else {
            None
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn category_seconds(&self, key: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn metadata(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn meta_text(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn total_seconds(&self) -> f64 {
        self.categories.iter().map(|(_, v)| v).sum()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
