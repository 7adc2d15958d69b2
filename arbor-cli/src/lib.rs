//! Support library for the `arbor` binary.
//!
//! Exposes the command pipeline, the comparison report and logging set-up so
//! doctests and integration tests can drive a comparison without spawning a
//! subprocess.

pub mod cli;
pub mod logging;
pub mod report;
