//! Command implementations
//!
//! Each command writes its user-facing output to the given writer so it can be
//! exercised without a terminal. Result records go to the evaluator's sink.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use polish_calculator::{CalcError, Evaluator};
use polish_types::Number;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Serialize, Debug)]
struct EvaluationRecord<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_error: Option<bool>,
}

impl<'a> EvaluationRecord<'a> {
    fn new(expression: &'a str, outcome: &Result<Number, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self {
                expression,
                result: Some(*value),
                error: None,
                category: None,
                input_error: None,
            },
            Err(err) => Self {
                expression,
                result: None,
                error: Some(err.to_string()),
                category: Some(err.category()),
                input_error: Some(err.is_input_error()),
            },
        }
    }
}

/// Totals reported when a REPL session ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    pub evaluated: usize,
    pub failed: usize,
}

/// Evaluate `expressions` in order, printing each value; the first failure ends the run.
pub fn run_eval(
    evaluator: &Evaluator,
    expressions: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for expression in expressions {
        let outcome = evaluator.evaluate(expression);
        write_outcome(out, format, expression, &outcome)?;

        if let Err(err) = outcome {
            warn!(category = err.category(), %expression, "Evaluation failed");
            return Err(err).with_context(|| format!("failed to evaluate '{expression}'"));
        }
    }
    Ok(())
}

/// Evaluate one expression per input line until end of input.
///
/// Failures are reported and the session continues. Blank lines are skipped;
/// only the line terminator is stripped, so stray spaces still make a line
/// malformed.
pub fn run_repl(
    evaluator: &Evaluator,
    input: impl BufRead,
    format: OutputFormat,
    prompt: Option<&str>,
    out: &mut impl Write,
) -> Result<ReplSummary> {
    let mut summary = ReplSummary::default();

    write_prompt(out, prompt)?;
    for line in input.lines() {
        let line = line.context("failed to read expression from input")?;
        let expression = line.strip_suffix('\r').unwrap_or(&line);

        if expression.is_empty() {
            write_prompt(out, prompt)?;
            continue;
        }

        let outcome = evaluator.evaluate(expression);
        summary.evaluated += 1;
        if let Err(err) = &outcome {
            summary.failed += 1;
            debug!(category = err.category(), %expression, "Evaluation failed");
        }
        write_outcome(out, format, expression, &outcome)?;
        write_prompt(out, prompt)?;
    }

    info!(evaluated = summary.evaluated, failed = summary.failed, "REPL session finished");
    Ok(summary)
}

/// List operators with their descriptions, followed by aliases.
pub fn run_operators(
    evaluator: &Evaluator,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let registry = evaluator.registry();

    match format {
        OutputFormat::Text => {
            for name in registry.names() {
                writeln!(out, "{name:<8} {}", registry.describe(name)?)?;
            }
            for (alias, target) in registry.aliases() {
                writeln!(out, "{alias:<8} alias of {target}")?;
            }
        }
        OutputFormat::Json => {
            let operators: Vec<_> = registry
                .names()
                .into_iter()
                .map(|name| {
                    Ok(serde_json::json!({
                        "name": name,
                        "description": registry.describe(name)?,
                    }))
                })
                .collect::<Result<_, CalcError>>()?;
            let aliases: serde_json::Map<String, serde_json::Value> = registry
                .aliases()
                .into_iter()
                .map(|(alias, target)| (alias.to_string(), target.into()))
                .collect();
            let listing = serde_json::json!({ "operators": operators, "aliases": aliases });
            writeln!(out, "{}", serde_json::to_string(&listing)?)?;
        }
    }
    Ok(())
}

fn write_outcome(
    out: &mut impl Write,
    format: OutputFormat,
    expression: &str,
    outcome: &Result<Number, CalcError>,
) -> Result<()> {
    match format {
        OutputFormat::Text => match outcome {
            Ok(value) => writeln!(out, "{value}")?,
            Err(err) => writeln!(out, "error: {err}")?,
        },
        OutputFormat::Json => {
            let record = EvaluationRecord::new(expression, outcome);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

fn write_prompt(out: &mut impl Write, prompt: Option<&str>) -> Result<()> {
    if let Some(prompt) = prompt {
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    Ok(())
}
