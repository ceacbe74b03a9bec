//! Platform default-application launcher.
//!
//! # Responsibility
//! - Hand the journal file to the operating system's opener.
//! - Keep the spawned process detached from our stdio.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens a file with the platform default application (best-effort).
pub fn open_with_default_app(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        spawn_detached(Command::new("explorer").arg(path))
    }
    #[cfg(target_os = "macos")]
    {
        spawn_detached(Command::new("open").arg(path))
    }
    #[cfg(target_os = "linux")]
    {
        spawn_detached(Command::new("xdg-open").arg(path))
    }
}

fn spawn_detached(cmd: &mut Command) -> io::Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
