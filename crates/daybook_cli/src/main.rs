//! Daybook CLI entry point.
//!
//! # Responsibility
//! - Resolve configuration and today's date once at startup.
//! - Dispatch exactly one journal action per invocation.

mod args;
mod config;
mod launcher;
mod prompt;

use args::{Action, Cli};
use clap::Parser;
use config::ConfigError;
use daybook_core::{
    default_log_level, init_logging, FsJournalStore, JournalDate, JournalError, JournalService,
    JournalStore,
};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

const NO_JOURNAL_MESSAGE: &str = "You have no journal for today.";

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Journal(JournalError),
    Prompt(dialoguer::Error),
    Launcher(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Journal(err) => write!(f, "{err}"),
            Self::Prompt(err) => write!(f, "entry prompt failed: {err}"),
            Self::Launcher(err) => write!(f, "could not launch the default application: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Journal(err) => Some(err),
            Self::Prompt(err) => Some(err),
            Self::Launcher(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<JournalError> for CliError {
    fn from(value: JournalError) -> Self {
        Self::Journal(value)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(value: dialoguer::Error) -> Self {
        Self::Prompt(value)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(default_log_level()) {
        eprintln!("daybook: {err}");
    }

    if let Err(err) = run(&cli) {
        error!("event=command_failed module=cli status=error error={err}");
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let journal_dir = config::resolve_journal_dir()?;
    let today = JournalDate::today();
    let service = JournalService::new(FsJournalStore::new(journal_dir));

    match cli.action() {
        Action::Info => {
            println!("Journal folder: {}", service.journal_dir().display());
            Ok(())
        }
        Action::List => list_today(&service, today),
        Action::Open => open_today(&service, today),
        Action::Add => add_entry(&service, today),
    }
}

fn list_today<S: JournalStore>(
    service: &JournalService<S>,
    today: JournalDate,
) -> Result<(), CliError> {
    match service.read_day(today)? {
        Some(content) => println!("\n{content}"),
        None => println!("{NO_JOURNAL_MESSAGE}"),
    }
    Ok(())
}

fn open_today<S: JournalStore>(
    service: &JournalService<S>,
    today: JournalDate,
) -> Result<(), CliError> {
    if !service.day_exists(today)? {
        println!("{NO_JOURNAL_MESSAGE}");
        return Ok(());
    }
    launcher::open_with_default_app(&service.day_path(today)).map_err(CliError::Launcher)
}

fn add_entry<S: JournalStore>(
    service: &JournalService<S>,
    today: JournalDate,
) -> Result<(), CliError> {
    let bullet = prompt::collect_bullet()?;
    service.add_bullet(today, &bullet)?;
    Ok(())
}
