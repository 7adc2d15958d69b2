//! Property-based tests for the Kruskal and Prim engines.
//!
//! Checks both engines against a dense-matrix oracle, validates structural
//! invariants (acyclicity, edge budget, membership) and confirms that repeated
//! and concurrent runs are deterministic across graph topologies with varied
//! weight distributions.

mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
