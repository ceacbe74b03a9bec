//! Journal store contract and filesystem implementation.
//!
//! # Responsibility
//! - Provide stable day-file operations for core callers.
//! - Map calendar dates to paths under one fixed journal directory.
//!
//! # Invariants
//! - `resolve_path` is pure and deterministic for a given date.
//! - `ensure_day` writes the header only when the file is absent.
//! - `append_bullet` never creates a file; the append fails when
//!   `ensure_day` has not run for that date.

use crate::model::bullet::Bullet;
use crate::model::day::JournalDate;
use crate::store::{JournalError, JournalResult};
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Persistence interface for day-file operations.
pub trait JournalStore {
    /// Returns the fixed journal base directory.
    fn base_dir(&self) -> &Path;

    /// Maps a date to its journal file path. Pure, no side effects.
    fn resolve_path(&self, day: JournalDate) -> PathBuf;

    /// Reports whether the day file exists.
    ///
    /// A missing file is `Ok(false)`; any other I/O failure propagates.
    fn day_exists(&self, day: JournalDate) -> JournalResult<bool>;

    /// Creates the day file with its header when absent; no-op otherwise.
    fn ensure_day(&self, day: JournalDate) -> JournalResult<()>;

    /// Appends one rendered bullet line to an existing day file.
    fn append_bullet(&self, day: JournalDate, bullet: &Bullet) -> JournalResult<()>;

    /// Returns the full day-file content, or `None` when no journal
    /// exists for that date.
    fn read_day(&self, day: JournalDate) -> JournalResult<Option<String>>;
}

/// Filesystem-backed journal store.
pub struct FsJournalStore {
    base_dir: PathBuf,
}

impl FsJournalStore {
    /// Creates a store rooted at the given journal directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl JournalStore for FsJournalStore {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve_path(&self, day: JournalDate) -> PathBuf {
        self.base_dir.join(day.file_name())
    }

    fn day_exists(&self, day: JournalDate) -> JournalResult<bool> {
        let path = self.resolve_path(day);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => {
                error!(
                    "event=journal_stat module=store status=error day={day} error={err}"
                );
                Err(JournalError::io(path, err))
            }
        }
    }

    fn ensure_day(&self, day: JournalDate) -> JournalResult<()> {
        if self.day_exists(day)? {
            return Ok(());
        }

        // Two processes racing here can both observe "absent"; the last
        // header write wins. Accepted for single-user interactive use.
        let path = self.resolve_path(day);
        fs::create_dir_all(&self.base_dir)
            .map_err(|err| JournalError::io(&self.base_dir, err))?;
        fs::write(&path, day.header()).map_err(|err| {
            error!(
                "event=journal_create module=store status=error day={day} error={err}"
            );
            JournalError::io(&path, err)
        })?;

        info!("event=journal_create module=store status=ok day={day}");
        Ok(())
    }

    fn append_bullet(&self, day: JournalDate, bullet: &Bullet) -> JournalResult<()> {
        let path = self.resolve_path(day);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|err| JournalError::io(&path, err))?;

        file.write_all(bullet.render_line().as_bytes())
            .map_err(|err| {
                error!(
                    "event=journal_append module=store status=error day={day} error={err}"
                );
                JournalError::io(&path, err)
            })
    }

    fn read_day(&self, day: JournalDate) -> JournalResult<Option<String>> {
        let path = self.resolve_path(day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                error!(
                    "event=journal_read module=store status=error day={day} error={err}"
                );
                Err(JournalError::io(path, err))
            }
        }
    }
}
