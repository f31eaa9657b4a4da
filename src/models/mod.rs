pub mod day_record;

pub use day_record::{DayRecord, KeyKind};
