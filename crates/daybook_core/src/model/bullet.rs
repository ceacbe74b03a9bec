//! Bullet domain model.
//!
//! # Responsibility
//! - Define the bullet categories a journal line can carry.
//! - Map each category exhaustively to its line prefix.
//! - Render a bullet into the single line appended to a day file.
//!
//! # Invariants
//! - `prefix()` covers every variant; there is no catch-all arm.
//! - Unknown labels parse to `BulletType::Note`, never to an error.
//! - A rendered line always ends with exactly one `\n`.

use serde::{Deserialize, Serialize};

/// Category of one journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletType {
    /// Free-form note.
    Note,
    /// Actionable item rendered with a checkbox marker.
    Todo,
    /// Calendar occurrence rendered with a circle marker.
    Event,
}

impl BulletType {
    /// Returns the line prefix for this bullet category.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Note => " - ",
            Self::Todo => "[ ]",
            Self::Event => "( )",
        }
    }

    /// Parses a user-facing label into a bullet category.
    ///
    /// Matching is case-insensitive. Any label outside
    /// `note`/`todo`/`event` falls back to `Note`; callers rely on the
    /// fallback instead of handling a parse failure.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "todo" => Self::Todo,
            "event" => Self::Event,
            _ => Self::Note,
        }
    }
}

/// One journal entry before it is rendered into a day file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: BulletType,
    /// Free-form entry text, kept verbatim.
    pub text: String,
}

impl Bullet {
    /// Creates a bullet of the given category.
    pub fn new(kind: BulletType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Renders this bullet as one day-file line: `<prefix> <text>\n`.
    pub fn render_line(&self) -> String {
        format!("{} {}\n", self.kind.prefix(), self.text)
    }
}
