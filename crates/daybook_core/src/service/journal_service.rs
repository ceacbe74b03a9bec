//! Journal use-case service.
//!
//! # Responsibility
//! - Provide the add/list/open entry points the CLI dispatches to.
//! - Delegate persistence to a `JournalStore` implementation.
//!
//! # Invariants
//! - `add_bullet` completes the header write before the append.
//! - Service APIs never bypass store contracts.

use crate::model::bullet::Bullet;
use crate::model::day::JournalDate;
use crate::store::journal_store::JournalStore;
use crate::store::JournalResult;
use std::path::{Path, PathBuf};

/// Use-case wrapper over a journal store.
pub struct JournalService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> JournalService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends one bullet to the given day's journal.
    ///
    /// # Contract
    /// - Creates the day file with its header first when absent.
    /// - The header write completes before the bullet append starts.
    pub fn add_bullet(&self, day: JournalDate, bullet: &Bullet) -> JournalResult<()> {
        self.store.ensure_day(day)?;
        self.store.append_bullet(day, bullet)
    }

    /// Returns the day's journal content, `None` when no journal exists.
    pub fn read_day(&self, day: JournalDate) -> JournalResult<Option<String>> {
        self.store.read_day(day)
    }

    /// Reports whether a journal exists for the given day.
    pub fn day_exists(&self, day: JournalDate) -> JournalResult<bool> {
        self.store.day_exists(day)
    }

    /// Returns the path the given day's journal lives at.
    pub fn day_path(&self, day: JournalDate) -> PathBuf {
        self.store.resolve_path(day)
    }

    /// Returns the fixed journal base directory.
    pub fn journal_dir(&self) -> &Path {
        self.store.base_dir()
    }
}
