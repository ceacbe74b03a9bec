//! Journal day model.
//!
//! # Responsibility
//! - Identify one journal file by its calendar date.
//! - Derive the file name and header text for that date.
//!
//! # Invariants
//! - File names are `YYYY-MM-DD.md` with zero-padded month/day.
//! - The header is `# YYYY-MM-DD` followed by one blank line.

use chrono::{Local, NaiveDate};
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date identifying exactly one journal file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JournalDate(NaiveDate);

impl JournalDate {
    /// Returns the current local calendar date.
    ///
    /// Callers compute this once at process start and pass it into store
    /// operations as a parameter.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Creates a date from calendar components, `None` for invalid input.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the journal file name for this date, `YYYY-MM-DD.md`.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0.format(DATE_FORMAT))
    }

    /// Returns the header written on first creation of the day file.
    pub fn header(&self) -> String {
        format!("# {}\n\n", self.0.format(DATE_FORMAT))
    }
}

impl Display for JournalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
