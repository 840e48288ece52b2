use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "speed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Moderate submitted articles in the SPEED review queue", long_about = None)]
pub struct Cli {
    /// Path to a RON config file (defaults to ./speed.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the SPEED web service.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Where log output goes.
    #[arg(long, global = true, value_enum)]
    pub log: Option<LogArg>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive moderator console (default).
    Console,
    /// Print the articles awaiting moderation.
    List {
        /// Only show articles matching this term.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Move an article to the analyst queue.
    Approve { id: String },
    /// Move an article to the rejected queue.
    Reject { id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_takes_an_id_and_global_flags() {
        let cli = Cli::parse_from(["speed", "approve", "653f1c", "--base-url", "http://x", "-vv"]);
        assert_eq!(
            cli.command,
            Some(Command::Approve {
                id: "653f1c".to_string()
            })
        );
        assert_eq!(cli.base_url.as_deref(), Some("http://x"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn console_is_the_default() {
        let cli = Cli::parse_from(["speed"]);
        assert_eq!(cli.command, None);
    }
}
