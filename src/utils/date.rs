use chrono::{Days, NaiveDate};

/// Date format used as the row key of the activity table.
pub const TABLE_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today shifted back by `days` whole days.
pub fn today_minus(days: u32) -> NaiveDate {
    today()
        .checked_sub_days(Days::new(days as u64))
        .unwrap_or_else(today)
}

pub fn table_date(d: NaiveDate) -> String {
    d.format(TABLE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(table_date(d), "01/01/2024");
    }

    #[test]
    fn offset_moves_backwards() {
        let base = today();
        let shifted = today_minus(7);
        assert_eq!(base.signed_duration_since(shifted).num_days(), 7);
    }
}
