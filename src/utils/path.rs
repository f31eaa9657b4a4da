//! Path utilities: expand ~, derive export and backup destinations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Destination of the formatted export: same base name with a `_fancy`
/// suffix and an `.xlsx` extension.
pub fn fancy_output_path(table: &Path) -> PathBuf {
    let stem = table
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    table.with_file_name(format!("{stem}_fancy.xlsx"))
}

/// Destination of the copy-aside backup taken before a batch modification.
pub fn backup_path(table: &Path) -> PathBuf {
    let name = table
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    table.with_file_name(format!("{name}.bak"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fancy_path_keeps_directory_and_swaps_extension() {
        let out = fancy_output_path(Path::new("/tmp/timing.csv"));
        assert_eq!(out, PathBuf::from("/tmp/timing_fancy.xlsx"));
    }

    #[test]
    fn backup_path_appends_bak() {
        let out = backup_path(Path::new("/tmp/timing.csv"));
        assert_eq!(out, PathBuf::from("/tmp/timing.csv.bak"));
    }
}
