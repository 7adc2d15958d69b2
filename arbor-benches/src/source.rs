//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random Hamiltonian path over a
//! shuffled vertex order is laid down first, then extra random edges are
//! added. Extra edges may repeat a vertex pair or form self-loops, which
//! both engines must skip.

use arbor_core::{Edge, Graph};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Largest generated edge weight.
const MAX_WEIGHT: i64 = 1_000;

/// Errors raised for unusable synthetic graph configurations.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Number of edges the generated graph will contain.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertex_count.saturating_sub(1).saturating_add(
            self.vertex_count
                .saturating_mul(self.extra_edges_per_vertex),
        )
    }
}

/// Generates a connected graph from `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges_per_vertex: 2, seed: 42 };
/// let graph = generate_graph(&config)?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), config.edge_count());
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(config.edge_count());
    for (&from, &to) in order.iter().zip(order.iter().skip(1)) {
        edges.push(Edge::new(label(from), label(to), rng.gen_range(1..=MAX_WEIGHT)));
    }
    for _ in 0..config.vertex_count.saturating_mul(config.extra_edges_per_vertex) {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        edges.push(Edge::new(label(from), label(to), rng.gen_range(1..=MAX_WEIGHT)));
    }

    let labels = (0..config.vertex_count).map(label);
    Ok(Graph::new(labels, edges)?)
}

fn label(position: usize) -> String {
    format!("v{position}")
}
