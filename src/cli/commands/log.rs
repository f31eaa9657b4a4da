use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::{LogLogic, LogOptions};
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::utils::path::expand_tilde;

/// Add, set, or annotate time for one key, then persist the record.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        key,
        update,
        set,
        text,
        days,
        backup,
        yes,
    } = &cli.command
    {
        //
        // 1. Build the record: remembered table path unless --test
        //
        let side = if cli.test { None } else { Some(cfg.side_file()) };
        let mut record = DayRecord::create(&cfg.categories, side, *days);

        //
        // 2. Apply the --file override
        //
        if let Some(file) = &cli.file {
            record.set_file(expand_tilde(file));
        }

        //
        // 3. Execute logic
        //
        LogLogic::apply(
            &mut record,
            &LogOptions {
                key: key.clone(),
                update: *update,
                set: *set,
                text: text.clone(),
                backup: *backup,
                assume_yes: *yes,
            },
        )?;
    }

    Ok(())
}
