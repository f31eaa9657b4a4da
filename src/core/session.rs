//! State machine behind the interactive timer.
//!
//! The session owns a `DayRecord` and a `View`; the surrounding command loop
//! feeds it elapsed wall time and user actions. Accrual, autosave cadence,
//! and save-plus-export behavior live here, free of any terminal handling.

use crate::export::fancy::FancyExport;
use crate::models::DayRecord;
use crate::ui::view::View;
use crate::utils::time::hours_minutes_seconds;
use std::path::PathBuf;
use std::time::Duration;

pub struct TimerSession<V: View> {
    record: DayRecord,
    view: V,
    autosave_every: Duration,
    since_autosave: Duration,
}

impl<V: View> TimerSession<V> {
    pub fn new(record: DayRecord, view: V, autosave_every: Duration) -> Self {
        Self {
            record,
            view,
            autosave_every,
            since_autosave: Duration::ZERO,
        }
    }

    pub fn record(&self) -> &DayRecord {
        &self.record
    }

    pub fn set_file(&mut self, path: PathBuf) {
        self.record.set_file(path.clone());
        self.view
            .show_message(&format!("Saving to {}", path.display()));
    }

    /// Start timing a category. Starting the one already running toggles the
    /// timer off, mirroring the original start/stop buttons.
    pub fn start(&mut self, key: &str) {
        if self.record.selected() == Some(key) {
            self.stop();
            return;
        }
        match self.record.select(Some(key)) {
            Ok(()) => self.view.show_status(&format!("Timing {key}")),
            Err(e) => self.view.show_error(&e.to_string()),
        }
    }

    pub fn stop(&mut self) {
        self.record.stop();
        self.view.show_status("Timer paused");
    }

    /// Account for wall time elapsed since the previous call: accrue it onto
    /// the selected category and flush to disk once the autosave interval
    /// has passed.
    pub fn tick(&mut self, elapsed: Duration) {
        self.record.update(elapsed.as_secs_f64());

        self.since_autosave += elapsed;
        if self.since_autosave >= self.autosave_every {
            self.since_autosave = Duration::ZERO;
            self.autosave();
        }
    }

    fn autosave(&mut self) {
        let Some(path) = self.record.file().map(PathBuf::from) else {
            return;
        };
        match self.record.save() {
            Ok(()) => self.view.show_message(&format!(
                "Autosaved to {} at {}",
                path.display(),
                now_hms()
            )),
            Err(e) => self.view.show_error(&e.to_string()),
        }
    }

    /// Save the record and refresh the formatted spreadsheet. A spreadsheet
    /// locked by another program is reported without ending the session.
    pub fn save(&mut self) {
        let Some(path) = self.record.file().map(PathBuf::from) else {
            self.view.show_error("No file selected, please select one");
            return;
        };

        if let Err(e) = self.record.save() {
            self.view.show_error(&e.to_string());
            return;
        }

        match FancyExport::export(&path, &self.record.category_names()) {
            Ok(_) => self.view.show_message(&format!(
                "Successfully saved to {} at {}",
                path.display(),
                now_hms()
            )),
            // ExportLocked carries the actionable "close the spreadsheet" text
            Err(e) => self.view.show_error(&e.to_string()),
        }
    }

    pub fn times(&mut self) {
        let rows: Vec<(String, String)> = self
            .record
            .categories()
            .map(|(name, secs)| (name.to_string(), hours_minutes_seconds(secs)))
            .collect();
        let total = hours_minutes_seconds(self.record.total_seconds());
        self.view.show_times(&rows, &total);
    }
}

fn now_hms() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
