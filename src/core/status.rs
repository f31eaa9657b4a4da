use crate::models::DayRecord;
use crate::ui::messages;
use crate::utils::table::TextTable;
use crate::utils::time::hours_minutes_seconds;

pub struct StatusLogic;

impl StatusLogic {
    /// Print one day's accumulated times and metadata as a text table.
    pub fn show(record: &DayRecord) {
        match record.file() {
            Some(path) => messages::info(format!(
                "Record for {} from {}",
                record.date(),
                path.display()
            )),
            None => messages::info(format!(
                "Record for {} (no table file selected yet)",
                record.date()
            )),
        }

        let mut table = TextTable::new(vec!["Category", "Time"]);
        for (name, seconds) in record.categories() {
            table.add_row(vec![name.to_string(), hours_minutes_seconds(seconds)]);
        }
        table.add_row(vec![
            "Total".to_string(),
            hours_minutes_seconds(record.total_seconds()),
        ]);
        print!("{}", table.render());

        // metadata values carry their own "Key:" placeholder prefix
        for (_, text) in record.metadata() {
            println!("{text}");
        }
    }
}
