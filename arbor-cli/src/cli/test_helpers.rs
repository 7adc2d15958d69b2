//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, CompareCommand, run_cli};

pub(super) const DIAMOND: &str = r#"{"graphs":[{
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "A", "to": "C", "weight": 4},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "B", "to": "D", "weight": 5},
        {"from": "C", "to": "D", "weight": 3}
    ]}]}"#;

pub(super) const TWO_GRAPHS: &str = r#"{"graphs":[
    {"nodes": ["A", "B", "C"],
     "edges": [{"from": "A", "to": "B", "weight": 2}, {"from": "B", "to": "C", "weight": 3}]},
    {"nodes": ["A", "B", "C", "D"],
     "edges": [{"from": "A", "to": "B", "weight": 1}, {"from": "C", "to": "D", "weight": 2}]}
]}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn compare(inputs: Vec<PathBuf>, results_dir: Option<PathBuf>) -> Cli {
    Cli {
        command: Command::Compare(CompareCommand {
            inputs,
            results_dir,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
