//! Presentation seam for the interactive timer.
//!
//! `TimerSession` talks to the outside world only through this trait, so the
//! accrual and autosave logic carries no terminal (or toolkit) dependency.

use crate::ui::messages;
use crate::utils::table::TextTable;

pub trait View {
    /// One-line state change: which timer is running, paused, etc.
    fn show_status(&mut self, text: &str);

    /// Per-category durations plus the day total.
    fn show_times(&mut self, rows: &[(String, String)], total: &str);

    fn show_message(&mut self, text: &str);

    fn show_error(&mut self, text: &str);
}

/// Terminal implementation used by the `track` command.
pub struct TerminalView;

impl View for TerminalView {
    fn show_status(&mut self, text: &str) {
        messages::info(text);
    }

    fn show_times(&mut self, rows: &[(String, String)], total: &str) {
        let mut table = TextTable::new(vec!["Category", "Time"]);
        for (name, time) in rows {
            table.add_row(vec![name.clone(), time.clone()]);
        }
        print!("{}", table.render());
        println!("Total today {total}");
    }

    fn show_message(&mut self, text: &str) {
        messages::success(text);
    }

    fn show_error(&mut self, text: &str) {
        messages::error(text);
    }
}
