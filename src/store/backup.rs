// src/store/backup.rs
// =============================================================================
// Dated backups of the collection file.
//
// Before we overwrite articles.json we copy it to:
//   articles.json.20240315.bkp
// i.e. "<base><ext>.<YYYYMMDD>.bkp". Running twice on the same day replaces
// that day's backup.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::StoreError;

// Builds the backup path for a file on a given date
//
// Example:
//   "data/articles.json" on 2024-03-05 -> "data/articles.json.20240305.bkp"
pub fn backup_path(path: &Path, date: NaiveDate) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}.bkp", date.format("%Y%m%d")));
    PathBuf::from(name)
}

// Copies the file to today's backup path and returns where it went
pub fn create_backup(path: &Path) -> Result<PathBuf, StoreError> {
    let destination = backup_path(path, Local::now().date_naive());

    fs::copy(path, &destination)
        .map_err(|e| StoreError::io("failed to create backup", &destination, e))?;

    info!(backup = %destination.display(), "backup created");
    Ok(destination)
}
