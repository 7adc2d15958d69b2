//! Minimum spanning tree (MST) engines.
//!
//! Two independent sequential engines consume the same [`Graph`]:
//!
//! - [`KruskalEngine`]: stable sort by weight, cycle rejection through a
//!   private union-find, early exit at `V - 1` edges. Disconnected input
//!   yields a minimum spanning forest.
//! - [`PrimEngine`]: lazy decrease-key growth from the first declared vertex
//!   over the adjacency index. Disconnected input yields the tree of the seed
//!   vertex's component only; the engine does not restart from unvisited
//!   vertices.
//!
//! Neither engine fails once a graph has been constructed.

mod kruskal;
mod prim;
mod result;
mod union_find;

use crate::Graph;

pub use self::kruskal::{KruskalEngine, kruskal};
pub use self::prim::{PrimEngine, prim};
pub use self::result::{MstAlgorithm, MstResult};

/// Common interface of the MST engines.
///
/// Implementations allocate their own working state per call and never
/// mutate the graph, so a single engine value may be used concurrently.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, KruskalEngine, MstEngine, PrimEngine};
///
/// let graph = Graph::new(["A", "B"], vec![Edge::new("A", "B", 2)])?;
/// let engines: [&dyn MstEngine; 2] = [&PrimEngine, &KruskalEngine];
/// for engine in engines {
///     assert_eq!(engine.find_mst(&graph).total_cost(), 2);
/// }
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
pub trait MstEngine: Send + Sync {
    /// Returns the algorithm implemented by this engine.
    fn algorithm(&self) -> MstAlgorithm;

    /// Computes a minimum spanning tree (or the engine's documented partial
    /// result on disconnected input).
    fn find_mst(&self, graph: &Graph) -> MstResult;
}


#[cfg(test)]
mod property;
