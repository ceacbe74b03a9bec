//! Command-line argument surface.
//!
//! # Responsibility
//! - Declare the four mutually exclusive journal actions.
//! - Resolve parsed flags into one `Action`, defaulting to Add.

use clap::{ArgGroup, Parser};

/// Day-journal command line.
#[derive(Parser, Debug)]
#[command(name = "daybook", version)]
#[command(about = "Append bullets to today's journal, list it, or open it")]
#[command(group(ArgGroup::new("action").args(["info", "list", "open"])))]
pub struct Cli {
    /// Print the journal folder location
    #[arg(short, long)]
    pub info: bool,

    /// Print today's journal entries
    #[arg(short, long)]
    pub list: bool,

    /// Open today's journal with the platform default application
    #[arg(short, long)]
    pub open: bool,
}

/// One journal action per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Info,
    List,
    Open,
    Add,
}

impl Cli {
    /// Returns the selected action; no flag means interactive add.
    pub fn action(&self) -> Action {
        if self.info {
            Action::Info
        } else if self.list {
            Action::List
        } else if self.open {
            Action::Open
        } else {
            Action::Add
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Cli};
    use clap::Parser;

    #[test]
    fn no_flags_defaults_to_add() {
        let cli = Cli::try_parse_from(["daybook"]).unwrap();
        assert_eq!(cli.action(), Action::Add);
    }

    #[test]
    fn each_flag_selects_its_action() {
        let info = Cli::try_parse_from(["daybook", "--info"]).unwrap();
        assert_eq!(info.action(), Action::Info);

        let list = Cli::try_parse_from(["daybook", "-l"]).unwrap();
        assert_eq!(list.action(), Action::List);

        let open = Cli::try_parse_from(["daybook", "-o"]).unwrap();
        assert_eq!(open.action(), Action::Open);
    }

    #[test]
    fn action_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["daybook", "--info", "--list"]).is_err());
        assert!(Cli::try_parse_from(["daybook", "-l", "-o"]).is_err());
    }
}
