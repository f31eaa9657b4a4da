use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { days } = &cli.command {
        let side = if cli.test { None } else { Some(cfg.side_file()) };
        let mut record = DayRecord::create(&cfg.categories, side, *days);

        if let Some(file) = &cli.file {
            record.set_file(expand_tilde(file));
        }

        StatusLogic::show(&record);
    }

    Ok(())
}
