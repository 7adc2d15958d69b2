//! Shared test utilities used across arbor crates.
//!
//! - [`tracing`]: a recording layer for asserting spans and events emitted
//!   by the MST engines, the JSON loader and the CLI.
//! - [`ci`]: environment-driven tuning for property-test suites.

pub mod ci;
pub mod tracing;
