//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Near-complete graph (edge probability 0.7-0.95).
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
    /// Weights at and next to the `i64` limits, so costs exceed `i64`.
    Extreme,
}

/// Fixture for MST property tests.
///
/// Vertices are the positions `0..node_count`, labelled `v{position}` when
/// materialised as a [`Graph`]; position `0` is therefore Prim's seed.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Generated `(from, to, weight)` edges in declaration order.
    pub edges: Vec<(usize, usize, i64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the [`Graph`] described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        let labels: Vec<String> = (0..self.node_count).map(label).collect();
        let edges = self
            .edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(label(from), label(to), weight))
            .collect();
        Graph::new(labels, edges).expect("fixture edges only reference declared vertices")
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len(),
        )
    }
}

/// Returns the vertex label for a fixture position.
pub(super) fn label(position: usize) -> String {
    format!("v{position}")
}
