//! Benchmark parameter labels.

use std::fmt;

/// Parameters identifying one MST benchmark input.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertex_count, self.edge_count)
    }
}
