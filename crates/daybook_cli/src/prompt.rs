//! Interactive entry prompt.
//!
//! # Responsibility
//! - Collect entry text and bullet type from the terminal.
//! - Map the selected label into the domain `BulletType`.

use daybook_core::{Bullet, BulletType};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

const TYPE_CHOICES: [&str; 3] = ["Note", "TODO", "Event"];

/// Prompts for one journal entry: free-form text, then a type choice.
///
/// The selected label goes through `BulletType::from_label`, so an
/// unexpected label still yields a note bullet.
pub fn collect_bullet() -> Result<Bullet, dialoguer::Error> {
    let theme = ColorfulTheme::default();

    let text: String = Input::with_theme(&theme)
        .with_prompt("Text:")
        .allow_empty(true)
        .interact_text()?;

    let selected = Select::with_theme(&theme)
        .with_prompt("Type:")
        .items(&TYPE_CHOICES)
        .default(0)
        .interact()?;

    Ok(Bullet::new(
        BulletType::from_label(TYPE_CHOICES[selected]),
        text,
    ))
}
