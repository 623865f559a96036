//! `monkey run`: evaluate a file.

use std::io::Write;
use std::path::{Path, PathBuf};

use monkey_eval::{EvalConfig, Environment, Interpreter};
use tracing::debug;

use super::read_file;
use crate::{run_source, CliError, Outcome};

/// Arguments accepted by `run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub path: PathBuf,
    pub config: EvalConfig,
}

/// Parse `run` arguments: one path plus `--max-depth=<n|unlimited>` and
/// `--step-budget=<n>`, in any order.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, CliError> {
    let mut config = EvalConfig::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            config.max_call_depth = if value == "unlimited" {
                None
            } else {
                Some(parse_number("--max-depth", value)?)
            };
        } else if let Some(value) = arg.strip_prefix("--step-budget=") {
            config.step_budget = Some(parse_number("--step-budget", value)?);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    let path = path.ok_or(CliError::MissingPath)?;
    Ok(RunArgs { path, config })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidFlag {
        flag,
        value: value.to_string(),
    })
}

/// Evaluate the file at `path` with a fresh global environment.
///
/// The final value is written to `out` unless it is `null`; parse errors
/// are written as a tab-indented list. Returns `Ok(false)` when the file
/// failed to parse or evaluated to an error.
pub fn run_file(
    path: &Path,
    interpreter: &mut Interpreter,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), "running file");

    let env = Environment::new();
    let outcome = run_source(&source, &env, interpreter);
    match &outcome {
        Outcome::Value(value) if value.is_null() => {}
        Outcome::ParseErrors(_) => {
            writeln!(out, "parser errors:")?;
            writeln!(out, "{outcome}")?;
        }
        Outcome::Value(_) => writeln!(out, "{outcome}")?,
    }
    Ok(outcome.is_success())
}
