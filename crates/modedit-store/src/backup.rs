//! Backup snapshots
//!
//! Before a modes file is overwritten its current bytes are copied to
//! `{backup_dir}/{file_name}_{YYYYMMDDHHMMSS}.json_backup`. Backups are
//! never pruned. Two snapshots of the same file within one second map to
//! the same name and the later one replaces the earlier.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::errors::{io_error, Result};

/// Suffix of every backup file
pub const BACKUP_EXTENSION: &str = "json_backup";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Seconds-resolution timestamp used in backup names
pub fn backup_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Backup file name for `target` taken at `timestamp`
pub fn backup_file_name(target: &Path, timestamp: &str) -> String {
    let base = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "modes".to_string());
    format!("{}_{}.{}", base, timestamp, BACKUP_EXTENSION)
}

/// Copy `target` into `backup_dir` if it is an existing regular file
///
/// Creates `backup_dir` first. Returns the backup path, or `None` when
/// there was nothing to back up. Permission bits and the modification
/// time are carried over; failing to carry the time over is not an error.
///
/// # Errors
///
/// Returns `ExErrorKind::Io` if the directory cannot be created or the
/// copy fails.
pub fn snapshot(target: &Path, backup_dir: &Path, timestamp: &str) -> Result<Option<PathBuf>> {
    fs::create_dir_all(backup_dir).map_err(|e| io_error("create_backup_dir", backup_dir, e))?;

    if !target.is_file() {
        return Ok(None);
    }

    let dest = backup_dir.join(backup_file_name(target, timestamp));
    fs::copy(target, &dest).map_err(|e| io_error("backup_copy", target, e))?;

    if let Err(e) = copy_mtime(target, &dest) {
        debug!(op = "backup_copy", backup_path = %dest.display(), error = %e, "mtime not preserved");
    }

    Ok(Some(dest))
}

fn copy_mtime(from: &Path, to: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(from)?.modified()?;
    File::options().write(true).open(to)?.set_modified(modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_timestamp_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap()
            .and_utc();
        assert_eq!(backup_timestamp(&at), "20240309070501");
    }

    #[test]
    fn test_backup_file_name_keeps_extension() {
        let name = backup_file_name(Path::new("/cfg/custom_modes.json"), "20240309070501");
        assert_eq!(name, "custom_modes.json_20240309070501.json_backup");
    }

    #[test]
    fn test_snapshot_of_missing_target_creates_dir_only() {
        let dir = TempDir::new().unwrap();
        let backups = dir.path().join("backups");

        let result = snapshot(&dir.path().join("absent.json"), &backups, "20240101000000").unwrap();

        assert!(result.is_none());
        assert!(backups.is_dir());
        assert_eq!(fs::read_dir(&backups).unwrap().count(), 0);
    }

    #[test]
    fn test_snapshot_copies_bytes() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("modes.json");
        fs::write(&target, b"[1, 2]").unwrap();
        let ts = backup_timestamp(&Local::now());

        let backup = snapshot(&target, &dir.path().join("b"), &ts).unwrap().unwrap();

        assert_eq!(fs::read(&backup).unwrap(), b"[1, 2]");
        assert_eq!(
            fs::metadata(&backup).unwrap().modified().unwrap(),
            fs::metadata(&target).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn test_snapshot_skips_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("not-a-file");
        fs::create_dir(&target).unwrap();
        let ts = backup_timestamp(&Utc::now());

        assert!(snapshot(&target, &dir.path().join("b"), &ts).unwrap().is_none());
    }
}
