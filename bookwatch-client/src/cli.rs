use std::path::PathBuf;

use clap::{Parser, Subcommand};

const HELP_EPILOG: &str = r#"Config resolution order:
  1) --config/-c PATH
  2) $BOOKWATCH_CONFIG
  3) XDG default: ~/.config/bookwatch/client.yaml

Console commands (interactive mode):
  go | stop | toggle   start or stop polling
  mins <N>             set the poll interval in minutes
  clear                remove all result rows
  rm <ROW>             remove one result row
  show                 print status and results
  quit                 stop polling and exit
"#;

#[derive(Debug, Parser)]
#[command(
    name = "bookwatch-client",
    version,
    about = "Polls a booking feed and notifies about new records",
    long_about = None,
    after_long_help = HELP_EPILOG,
)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Server URL (e.g., http://127.0.0.1:5000). Overrides the config file.
    #[arg(long)]
    pub server: Option<String>,
    /// Initial value of the poll interval field, in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub mins: Option<String>,
    /// Optional subcommand. Without one, runs the interactive poller.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current record list once and print it
    Fetch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides_and_subcommand() {
        let cli = Cli::parse_from([
            "bookwatch-client",
            "--server",
            "example.org:5000",
            "--mins",
            "2.5",
            "fetch",
        ]);
        assert_eq!(cli.server.as_deref(), Some("example.org:5000"));
        assert_eq!(cli.mins.as_deref(), Some("2.5"));
        assert!(matches!(cli.command, Some(Command::Fetch)));
    }

    #[test]
    fn runs_interactive_without_subcommand() {
        let cli = Cli::parse_from(["bookwatch-client", "-c", "/tmp/client.yaml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/client.yaml")));
    }
}
