//! Command implementations and argument parsing for the `arbor` CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_providers_json::{JsonGraphError, load_graphs_from_path};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::report::{self, ComparisonReport};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compare Prim and Kruskal minimum spanning trees.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run both engines over every graph in the given documents.
    Compare(CompareCommand),
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone)]
pub struct CompareCommand {
    /// JSON graph documents to compare.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving `<name>_results.json` and
    /// `<name>_results_summary.csv` for each input. Created when missing.
    #[arg(long = "results-dir")]
    pub results_dir: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Loading or validating an input document failed.
    #[error(transparent)]
    Load(#[from] JsonGraphError),
    /// Serializing the JSON results document failed.
    #[error("failed to write results document `{path}`: {source}")]
    Report {
        /// Destination of the results document.
        path: PathBuf,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone, Default)]
pub struct ExecutionSummary {
    /// One entry per input document, in argument order.
    pub files: Vec<FileComparison>,
}

/// Comparison of every graph in one input document.
#[derive(Debug, Clone)]
pub struct FileComparison {
    /// Input document path as given.
    pub input: PathBuf,
    /// Report name derived from the input file stem.
    pub name: String,
    /// Both engines' results per graph.
    pub report: ComparisonReport,
    /// Files written for this input, when a results directory was given.
    pub outputs: Option<ResultFiles>,
}

/// Paths of the files written for one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFiles {
    /// Pretty-printed JSON results document.
    pub json: PathBuf,
    /// CSV summary.
    pub csv: PathBuf,
}

impl ResultFiles {
    fn new(dir: &Path, name: &str) -> Self {
        Self {
            json: dir.join(format!("{name}_results.json")),
            csv: dir.join(format!("{name}_results_summary.csv")),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be loaded or an output cannot
/// be written. Processing stops at the first failing input.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, CompareCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("demo.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs":[{"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":2}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Compare(CompareCommand {
///         inputs: vec![input],
///         results_dir: Some(dir.path().join("out")),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.files[0].report.results[0].kruskal.total_cost, 2);
/// assert!(dir.path().join("out/demo_results.json").exists());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Compare(compare) => {
            Span::current().record("command", field::display("compare"));
            run_compare(compare)
        }
    }
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(inputs = command.inputs.len(), results_dir = field::Empty),
)]
pub(super) fn run_compare(command: CompareCommand) -> Result<ExecutionSummary, CliError> {
    let CompareCommand {
        inputs,
        results_dir,
    } = command;
    if let Some(dir) = &results_dir {
        Span::current().record("results_dir", field::display(dir.display()));
    }

    let files = inputs
        .into_iter()
        .map(|input| compare_file(input, results_dir.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        files = files.len(),
        graphs = files.iter().map(|file| file.report.results.len()).sum::<usize>(),
        "comparison completed"
    );
    Ok(ExecutionSummary { files })
}

#[instrument(
    name = "cli.compare_file",
    err,
    skip(input, results_dir),
    fields(path = %input.display(), graphs = field::Empty, diverged = field::Empty),
)]
pub(super) fn compare_file(
    input: PathBuf,
    results_dir: Option<&Path>,
) -> Result<FileComparison, CliError> {
    let graphs = load_graphs_from_path(&input)?;
    let report = report::compare_graphs(&graphs);

    let span = Span::current();
    span.record("graphs", report.results.len());
    span.record(
        "diverged",
        report.results.iter().filter(|row| row.diverged()).count(),
    );

    let name = derive_report_name(&input);
    let outputs = results_dir
        .map(|dir| save_results(&report, dir, &name))
        .transpose()?;

    Ok(FileComparison {
        input,
        name,
        report,
        outputs,
    })
}

/// Writes the JSON results document and the CSV summary under `dir`.
pub(super) fn save_results(
    report: &ComparisonReport,
    dir: &Path,
    name: &str,
) -> Result<ResultFiles, CliError> {
    let files = ResultFiles::new(dir, name);

    let mut json = create_output(&files.json)?;
    report::write_json(report, &mut json).map_err(|source| CliError::Report {
        path: files.json.clone(),
        source,
    })?;
    json.flush().map_err(|source| io_error(&files.json, source))?;

    let mut csv = create_output(&files.csv)?;
    report::write_csv(report, &mut csv)
        .and_then(|()| csv.flush())
        .map_err(|source| io_error(&files.csv, source))?;

    info!(json = %files.json.display(), csv = %files.csv.display(), "results written");
    Ok(files)
}

/// Creates `path` for writing, creating missing parent directories first.
fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub(super) fn derive_report_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graphs".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for file in &summary.files {
        writeln!(writer, "input: {}", file.input.display())?;
        report::write_summary(&file.report, &mut writer)?;
        if let Some(outputs) = &file.outputs {
            writeln!(writer, "results: {}", outputs.json.display())?;
            writeln!(writer, "summary: {}", outputs.csv.display())?;
        }
    }
    Ok(())
}
