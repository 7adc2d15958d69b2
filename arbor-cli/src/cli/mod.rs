//! Command-line interface orchestration for `arbor`.
//!
//! The single `compare` command loads one or more JSON graph documents, runs
//! both MST engines over every graph, optionally writes per-document JSON and
//! CSV results, and renders a summary to stdout.

mod commands;

pub use commands::{
    Cli, CliError, Command, CompareCommand, ExecutionSummary, FileComparison, ResultFiles,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
