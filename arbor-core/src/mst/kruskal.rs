//! Kruskal engine: stable weight sort plus union-find cycle rejection.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::Graph;

use super::result::OperationCounter;
use super::union_find::DisjointSet;
use super::{MstAlgorithm, MstEngine, MstResult};

/// Computes MSTs with Kruskal's algorithm.
///
/// See [`kruskal`] for the selection rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalEngine;

impl MstEngine for KruskalEngine {
    fn algorithm(&self) -> MstAlgorithm {
        MstAlgorithm::Kruskal
    }

    fn find_mst(&self, graph: &Graph) -> MstResult {
        kruskal(graph)
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edges are scanned in ascending weight order. The sort is stable, so edges
/// of equal weight are considered in declaration order. Scanning stops as
/// soon as `V - 1` edges have been selected; on a disconnected graph the scan
/// exhausts the edge list and the result holds one tree per component.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)],
/// )?;
/// let forest = kruskal(&graph);
/// assert_eq!(forest.total_cost(), 3);
/// assert_eq!(forest.edge_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> MstResult {
    let started = Instant::now();
    let mut operations = OperationCounter::default();

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by_key(|&edge_id| graph.edge(edge_id).weight());
    operations.add(sort_cost(order.len()));

    let target = graph.vertex_count().saturating_sub(1);
    let mut components = DisjointSet::new(graph.vertex_count());
    let mut selected = Vec::with_capacity(target);

    for &edge_id in &order {
        operations.tick();
        if selected.len() == target {
            break;
        }

        let (from, to) = graph.endpoints(edge_id);
        let from_root = components.find(from);
        let to_root = components.find(to);
        operations.add(3);

        if from_root != to_root {
            components.union(from_root, to_root);
            operations.tick();
            selected.push(graph.edge(edge_id).clone());
        }
    }

    let elapsed = started.elapsed();
    if selected.len() < target {
        debug!(
            components = components.components(),
            selected = selected.len(),
            "graph is disconnected; returning a minimum spanning forest"
        );
    }

    let result = MstResult::new(MstAlgorithm::Kruskal, selected, elapsed, operations.get());
    debug!(
        selected = result.edge_count(),
        total_cost = result.total_cost(),
        operations = result.operations(),
        "kruskal completed"
    );
    result
}

/// Approximates comparison-sort effort as `n * ceil(log2 n)`.
fn sort_cost(len: usize) -> u64 {
    let depth = len
        .checked_next_power_of_two()
        .map_or(usize::BITS, usize::trailing_zeros);
    u64::try_from(len)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(depth))
}
