use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::backup_path;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the activity table aside before a batch modification. The copy
    /// lands next to the table with a `.bak` suffix; an existing copy is
    /// only replaced after the user confirms.
    pub fn backup(table: &Path) -> AppResult<Option<PathBuf>> {
        if !table.exists() {
            messages::warning(format!(
                "Nothing to back up yet: {} does not exist",
                table.display()
            ));
            return Ok(None);
        }

        let dest = backup_path(table);

        if dest.exists()
            && !messages::confirm(format!(
                "The backup '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            messages::error("Backup cancelled by user.");
            return Ok(None);
        }

        fs::copy(table, &dest)?;
        messages::success(format!("Backup created: {}", dest.display()));

        Ok(Some(dest))
    }
}
