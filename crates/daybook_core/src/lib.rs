//! Core domain logic for Daybook.
//! This crate is the single source of truth for journal-file invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bullet::{Bullet, BulletType};
pub use model::day::JournalDate;
pub use service::journal_service::JournalService;
pub use store::journal_store::{FsJournalStore, JournalStore};
pub use store::{JournalError, JournalResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
