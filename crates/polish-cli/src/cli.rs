//! Command-line definition for the `polish` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Evaluate Polish-notation binary expressions such as `(add 1 2)`
#[derive(Parser, Debug)]
#[command(name = "polish")]
#[command(about = "Evaluate Polish-notation binary expressions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to $POLISH_CONFIG_PATH, then ./polish.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate each expression in order, stopping at the first failure
    Eval {
        /// Expressions like "(add 1 2)"
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Read expressions from stdin, one per line
    Repl,

    /// List registered operators and aliases
    Operators,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
