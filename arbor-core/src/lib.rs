//! Arbor core library.
//!
//! Computes minimum spanning trees of weighted undirected graphs with two
//! independent engines and reports comparable metrics for each:
//!
//! - [`KruskalEngine`] sorts the edge list (stable, ascending by weight) and
//!   rejects cycles with a private union-find. On disconnected input it
//!   returns a minimum spanning forest.
//! - [`PrimEngine`] grows a single tree from the first declared vertex using a
//!   binary heap with lazy decrease-key. On disconnected input it returns the
//!   tree of the seed vertex's component only.
//!
//! Both engines return an [`MstResult`] and never mutate the [`Graph`] they
//! read, so one graph may be shared across threads.
//!
//! # Examples
//! ```
//! use arbor_core::{Edge, Graph, kruskal, prim};
//!
//! let graph = Graph::new(
//!     ["A", "B", "C"],
//!     vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2), Edge::new("A", "C", 3)],
//! )?;
//! assert_eq!(kruskal(&graph).total_cost(), 3);
//! assert_eq!(prim(&graph).total_cost(), 3);
//! # Ok::<(), arbor_core::GraphError>(())
//! ```

mod error;
mod graph;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyIndex, Edge, Graph, IncidentEdges},
    mst::{KruskalEngine, MstAlgorithm, MstEngine, MstResult, PrimEngine, kruskal, prim},
};
