//! Command handlers for the `monkey` binary.
//!
//! Each submodule implements one subcommand. Handlers write to a caller
//! supplied `Write` so they can be driven from tests; `main.rs` passes
//! stdout.

use std::path::Path;

use crate::CliError;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::run_repl;
pub use run::{parse_run_args, run_file, RunArgs};

/// Read a source file to a string.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
