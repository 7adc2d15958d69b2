//! Uniform output record shared by the MST engines.

use std::fmt;
use std::time::Duration;

use crate::Edge;

/// Identifies the engine that produced an [`MstResult`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Sort + union-find.
    Kruskal,
    /// Priority-queue growth from a single seed.
    Prim,
}

impl MstAlgorithm {
    /// Returns the display tag used by reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edges selected by one engine run, with cost and effort metrics.
///
/// `operations` is a relative cost proxy. It grows monotonically with the
/// work performed but is not an exact instruction count, and the Kruskal and
/// Prim conventions differ.
#[derive(Clone, Debug, PartialEq)]
pub struct MstResult {
    algorithm: MstAlgorithm,
    edges: Vec<Edge>,
    total_cost: i128,
    elapsed: Duration,
    operations: u64,
}

impl MstResult {
    pub(crate) fn new(
        algorithm: MstAlgorithm,
        edges: Vec<Edge>,
        elapsed: Duration,
        operations: u64,
    ) -> Self {
        let total_cost = edges.iter().map(|edge| i128::from(edge.weight())).sum();
        Self {
            algorithm,
            edges,
            total_cost,
            elapsed,
            operations,
        }
    }

    /// Returns the producing algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the selected edge weights (`0` when empty).
    ///
    /// The sum is widened to `i128`, so it is exact for any edge list whose
    /// weights are `i64`.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i128 { self.total_cost }

    /// Returns the wall-clock time spent in the algorithm body.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Returns the operation counter.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    /// Returns `true` when the selection spans `vertex_count` vertices, i.e.
    /// it holds exactly `vertex_count - 1` edges.
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

/// Saturating monotonic counter backing [`MstResult::operations`].
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct OperationCounter(u64);

impl OperationCounter {
    pub(super) fn add(&mut self, amount: u64) {
        self.0 = self.0.saturating_add(amount);
    }

    pub(super) fn tick(&mut self) {
        self.add(1);
    }

    pub(super) fn add_usize(&mut self, amount: usize) {
        self.add(u64::try_from(amount).unwrap_or(u64::MAX));
    }

    pub(super) fn get(self) -> u64 {
        self.0
    }
}
