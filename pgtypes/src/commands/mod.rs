mod completions;
mod generate;
mod inspect;
mod source;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;
use tracing::Level;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pgtypes_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pgtypes")]
#[command(version)]
#[command(about = "Generate Go table packages from a PostgreSQL schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Set the log level explicitly (overrides -v)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<Level>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    pub fn log_level(&self) -> Level {
        self.log_level.unwrap_or(match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Go package per table
    Generate(GenerateCommand),

    /// Show the tables and columns that would be generated
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
