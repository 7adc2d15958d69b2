//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks that compare the Prim and Kruskal engines.

pub mod error;
pub mod params;
pub mod source;
