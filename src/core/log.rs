use crate::core::backup::BackupLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, KeyKind};
use crate::ui::messages;
use crate::utils::time::hours_minutes;

pub struct LogOptions {
    pub key: String,
    pub update: Option<f64>,
    pub set: Option<f64>,
    pub text: Option<String>,
    pub backup: bool,
    pub assume_yes: bool,
}

pub struct LogLogic;

impl LogLogic {
    /// Apply one batch adjustment to `record` and persist it.
    ///
    /// The record must already point at a table file. The pending change is
    /// shown and confirmed on the terminal before anything is written.
    pub fn apply(record: &mut DayRecord, opts: &LogOptions) -> AppResult<()> {
        let path = record
            .file()
            .ok_or(AppError::NoTableFile)?
            .to_path_buf();

        let kind = record.key_kind(&opts.key).ok_or_else(|| AppError::UnknownKey {
            key: opts.key.clone(),
            valid: record.valid_keys().join(", "),
        })?;

        match kind {
            KeyKind::Category => {
                if opts.text.is_some() {
                    return Err(AppError::InvalidValue(format!(
                        "'{}' is a category; --text only applies to metadata keys",
                        opts.key
                    )));
                }
                if opts.update.is_none() && opts.set.is_none() {
                    return Err(AppError::InvalidValue(
                        "nothing to do: pass --update or --set".to_string(),
                    ));
                }
                if let Some(minutes) = opts.set {
                    record.set_minutes(&opts.key, minutes)?;
                }
                if let Some(minutes) = opts.update {
                    record.add_minutes(&opts.key, minutes)?;
                }

                let total = record.category_seconds(&opts.key).unwrap_or(0.0);
                messages::info(format!(
                    "{} on {} becomes {}",
                    opts.key,
                    record.date(),
                    hours_minutes(total)
                ));
            }
            KeyKind::Metadata => {
                let text = opts.text.clone().ok_or_else(|| {
                    AppError::InvalidValue(format!(
                        "'{}' is a metadata key; pass --text",
                        opts.key
                    ))
                })?;
                if opts.update.is_some() || opts.set.is_some() {
                    return Err(AppError::InvalidValue(format!(
                        "'{}' is a metadata key; --update/--set only apply to categories",
                        opts.key
                    )));
                }
                record.set_meta(&opts.key, text.clone())?;
                messages::info(format!("{} on {} becomes '{}'", opts.key, record.date(), text));
            }
        }

        if !opts.assume_yes && !messages::confirm(format!("Write to {}?", path.display())) {
            messages::warning("Cancelled, nothing written.");
            return Ok(());
        }

        if opts.backup {
            BackupLogic::backup(&path)?;
        }

        record.save()?;
        messages::success(format!("Saved {} to {}", record.date(), path.display()));

        Ok(())
    }
}
