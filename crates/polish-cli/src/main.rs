use anyhow::Result;
use clap::Parser;
use polish_cli::commands::{run_eval, run_operators, run_repl};
use polish_cli::{Cli, Command, ConfigSource, PolishConfig, logger};
use std::io::{self, IsTerminal};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = PolishConfig::load(cli.config.as_deref())?;
    logger::init_cli_logger(&config.logging, cli.verbose);

    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded configuration"),
        ConfigSource::Defaults(path) => warn!(
            "Configuration file '{}' not found. Using default configuration.",
            path.display()
        ),
    }
    debug!(?config, "Effective configuration");

    let evaluator = config.build_evaluator()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Eval { expressions } => run_eval(&evaluator, expressions, cli.format, &mut out),
        Command::Repl => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal().then_some("> ");
            run_repl(&evaluator, stdin.lock(), cli.format, prompt, &mut out).map(|_| ())
        }
        Command::Operators => run_operators(&evaluator, cli.format, &mut out),
    }
}
