//! Command-line front end for the Polish-notation calculator.
//!
//! The binary wires configuration, logging and the evaluator together; the
//! pieces live here so they can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigSource, PolishConfig};
