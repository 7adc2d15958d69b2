//! Prim engine: single-source growth with lazy decrease-key.
//!
//! The frontier is an ordinary [`BinaryHeap`] of `(weight, vertex)` entries.
//! Improving a vertex's connecting weight pushes a fresh entry and leaves the
//! old one in place; entries for vertices that are already in the tree are
//! discarded when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::Graph;

use super::result::OperationCounter;
use super::{MstAlgorithm, MstEngine, MstResult};

/// Computes MSTs with Prim's algorithm.
///
/// See [`prim`] for the seeding and disconnected-graph rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimEngine;

impl MstEngine for PrimEngine {
    fn algorithm(&self) -> MstAlgorithm {
        MstAlgorithm::Prim
    }

    fn find_mst(&self, graph: &Graph) -> MstResult {
        prim(graph)
    }
}

/// Per-call working state, indexed by vertex position.
struct Frontier {
    visited: Vec<bool>,
    best_weight: Vec<Option<i64>>,
    best_edge: Vec<Option<usize>>,
    queue: BinaryHeap<Reverse<(i64, usize)>>,
}

impl Frontier {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            best_weight: vec![None; vertex_count],
            best_edge: vec![None; vertex_count],
            queue: BinaryHeap::new(),
        }
    }

    fn seed(&mut self, vertex: usize) {
        self.best_weight[vertex] = Some(0);
        self.queue.push(Reverse((0, vertex)));
    }

    /// Records `edge_id` as the best connection for `vertex` when it beats
    /// the current best. Returns `true` when a new queue entry was pushed.
    fn relax(&mut self, vertex: usize, edge_id: usize, weight: i64) -> bool {
        if self.visited[vertex] || self.best_weight[vertex].is_some_and(|best| weight >= best) {
            return false;
        }
        self.best_weight[vertex] = Some(weight);
        self.best_edge[vertex] = Some(edge_id);
        self.queue.push(Reverse((weight, vertex)));
        true
    }

    fn reached(&self) -> usize {
        self.visited.iter().filter(|&&visited| visited).count()
    }
}

/// Computes a minimum spanning tree of the first vertex's component using
/// Prim's algorithm.
///
/// The first declared vertex seeds the tree and never has an edge attributed
/// to it. Only edges incident to the popped vertex are scanned, giving
/// `O(E log V)` overall. Queue ties are broken by the lower vertex position.
///
/// Vertices unreachable from the seed are never visited: on a disconnected
/// graph the result covers the seed's component only, unlike [`crate::kruskal`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, prim};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)],
/// )?;
/// let tree = prim(&graph);
/// assert_eq!(tree.total_cost(), 1);
/// assert_eq!(tree.edges(), [Edge::new("A", "B", 1)]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> MstResult {
    let started = Instant::now();
    let mut operations = OperationCounter::default();
    let vertex_count = graph.vertex_count();
    let mut selected = Vec::with_capacity(vertex_count.saturating_sub(1));

    if vertex_count == 0 {
        return MstResult::new(MstAlgorithm::Prim, selected, started.elapsed(), 0);
    }

    let mut frontier = Frontier::new(vertex_count);
    operations.add_usize(vertex_count);
    frontier.seed(0);
    operations.tick();

    let mut stale = 0_usize;
    while let Some(Reverse((_, vertex))) = frontier.queue.pop() {
        operations.tick();
        if frontier.visited[vertex] {
            stale += 1;
            continue;
        }

        frontier.visited[vertex] = true;
        operations.tick();

        if let Some(edge_id) = frontier.best_edge[vertex] {
            selected.push(graph.edge(edge_id).clone());
            operations.tick();
        }

        for &edge_id in graph.incident_ids(vertex) {
            operations.tick();
            let neighbour = other_endpoint(graph.endpoints(edge_id), vertex);
            if frontier.relax(neighbour, edge_id, graph.edge(edge_id).weight()) {
                operations.add(2);
            }
        }
    }

    let elapsed = started.elapsed();
    let reached = frontier.reached();
    if reached < vertex_count {
        debug!(
            reached,
            unreached = vertex_count - reached,
            "seed component does not span the graph"
        );
    }

    let result = MstResult::new(MstAlgorithm::Prim, selected, elapsed, operations.get());
    debug!(
        selected = result.edge_count(),
        total_cost = result.total_cost(),
        operations = result.operations(),
        stale,
        "prim completed"
    );
    result
}

fn other_endpoint((from, to): (usize, usize), vertex: usize) -> usize {
    if from == vertex { to } else { from }
}
