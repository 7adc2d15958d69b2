//! CLI entry point for comparing Prim and Kruskal minimum spanning trees.
//!
//! Parses arguments with clap, runs the comparison, renders the summary to
//! stdout and maps failures to a non-zero exit code. Logging is initialised
//! first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use arbor_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use arbor_providers_json::JsonGraphError;
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let load_error = err.downcast_ref::<CliError>().and_then(|cli_error| match cli_error {
            CliError::Load(load) => Some(load),
            _ => None,
        });
        let code = load_error.map(|load| field::display(load.code().as_str()));
        let graph_code = load_error
            .and_then(|load| match load {
                JsonGraphError::Graph(graph) => Some(graph.code()),
                _ => None,
            })
            .map(|code| field::display(code.as_str()));

        error!(
            error = %format!("{err:#}"),
            code = code,
            graph_code = graph_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
