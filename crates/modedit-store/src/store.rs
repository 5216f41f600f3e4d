//! Snapshotting store
//!
//! Ties backup, file encoding and per-path locking together. A write is
//! always: make sure the backup directory exists, snapshot the current file
//! if there is one, then overwrite. A failed snapshot is logged and the
//! write still happens. Concurrent writers to one path are serialized but
//! not reconciled: the last one to finish wins.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use modedit_core::{log_op_end, log_op_error, log_op_start, log_op_warn, ModeRecord};

use crate::backup::{backup_timestamp, snapshot};
use crate::errors::Result;
use crate::locks::{acquire, PathLocks};
use crate::modes_file;

/// What a successful write did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Snapshot of the previous content, if one was taken
    pub backup: Option<PathBuf>,
    pub records_written: usize,
}

/// Reads and writes modes files, snapshotting before every overwrite
#[derive(Debug)]
pub struct ModeStore {
    backup_dir: PathBuf,
    locks: PathLocks,
}

impl ModeStore {
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            locks: PathLocks::new(),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Read the records stored at `path`
    ///
    /// # Errors
    ///
    /// See [`modes_file::read_records`].
    pub fn read_records(&self, path: &Path) -> Result<Vec<ModeRecord>> {
        let lock = self.locks.lock_for(path);
        let _guard = acquire(&lock);

        let start = Instant::now();
        log_op_start!("read_records", file_path = %path.display());

        let result = modes_file::read_records(path);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(records) => {
                log_op_end!(
                    "read_records",
                    duration_ms = duration_ms,
                    file_path = %path.display(),
                    record_count = records.len()
                );
            }
            Err(err) => {
                log_op_error!(
                    "read_records",
                    err.clone(),
                    duration_ms = duration_ms,
                    file_path = %path.display()
                );
            }
        }

        result
    }

    /// Snapshot then overwrite `path` with `records`
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Io` (or `Serialization`) if the overwrite
    /// fails. Backup failures never surface here.
    pub fn write_records(&self, path: &Path, records: &[ModeRecord]) -> Result<WriteOutcome> {
        self.write_records_at(path, records, &Local::now())
    }

    /// [`ModeStore::write_records`] with an explicit clock reading for the
    /// backup name
    ///
    /// # Errors
    ///
    /// Same as [`ModeStore::write_records`].
    pub fn write_records_at(
        &self,
        path: &Path,
        records: &[ModeRecord],
        now: &DateTime<Local>,
    ) -> Result<WriteOutcome> {
        let lock = self.locks.lock_for(path);
        let _guard = acquire(&lock);

        let start = Instant::now();
        log_op_start!(
            "write_records",
            file_path = %path.display(),
            record_count = records.len()
        );

        let backup = match snapshot(path, &self.backup_dir, &backup_timestamp(now)) {
            Ok(backup) => backup,
            Err(err) => {
                log_op_warn!(
                    "write_records",
                    "backup failed; writing without a snapshot",
                    file_path = %path.display(),
                    error = %err
                );
                None
            }
        };

        let result = modes_file::write_records(path, records).map(|()| WriteOutcome {
            path: path.to_path_buf(),
            backup,
            records_written: records.len(),
        });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => {
                log_op_end!(
                    "write_records",
                    duration_ms = duration_ms,
                    file_path = %path.display(),
                    record_count = outcome.records_written,
                    backup_path = ?outcome.backup
                );
            }
            Err(err) => {
                log_op_error!(
                    "write_records",
                    err.clone(),
                    duration_ms = duration_ms,
                    file_path = %path.display()
                );
            }
        }

        result
    }
}
