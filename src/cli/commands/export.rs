use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::FancyExport;
use crate::models::DayRecord;
use crate::utils::path::expand_tilde;

/// Write the formatted spreadsheet for the current activity table.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let side = if cli.test { None } else { Some(cfg.side_file()) };
    let mut record = DayRecord::create(&cfg.categories, side, 0);

    if let Some(file) = &cli.file {
        record.set_file(expand_tilde(file));
    }

    let table = record.file().ok_or(AppError::NoTableFile)?.to_path_buf();
    if !table.is_file() {
        return Err(AppError::Export(format!(
            "Activity table not found: {}",
            table.display()
        )));
    }

    FancyExport::export(&table, &record.category_names())?;
    Ok(())
}
