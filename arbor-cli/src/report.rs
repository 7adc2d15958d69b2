//! Side-by-side comparison of the Prim and Kruskal engines.
//!
//! [`compare_graphs`] runs both engines over each graph and collects their
//! results into a [`ComparisonReport`], which renders as:
//!
//! - a pretty-printed JSON results document ([`write_json`]),
//! - a one-row-per-graph CSV summary ([`write_csv`]),
//! - human-readable lines for the terminal ([`write_summary`]).

use std::io::{self, Write};

use arbor_core::{Edge, Graph, MstResult, kruskal, prim};
use serde::Serialize;
use tracing::{debug, instrument};

/// Header row of the CSV summary.
pub const CSV_HEADER: &str = "GraphId,Vertices,Edges,PrimCost,KruskalCost,\
PrimTime(ms),KruskalTime(ms),PrimOperations,KruskalOperations";

/// Results for every graph of one input document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Per-graph comparisons in document order.
    pub results: Vec<GraphComparison>,
}

/// Both engines' results for one graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphComparison {
    /// 1-based position of the graph in its document.
    pub graph_id: usize,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's tree of the first vertex's component.
    pub prim: AlgorithmReport,
    /// Kruskal's minimum spanning forest.
    pub kruskal: AlgorithmReport,
}

impl GraphComparison {
    /// Whether the engines disagree on total cost or on the number of
    /// selected edges, which happens only when the graph is disconnected.
    #[must_use]
    pub fn diverged(&self) -> bool {
        self.prim.total_cost != self.kruskal.total_cost
            || self.prim.mst_edges.len() != self.kruskal.mst_edges.len()
    }
}

/// Vertex and edge counts of an input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct InputStats {
    /// Number of declared vertices.
    pub vertices: usize,
    /// Number of declared edges.
    pub edges: usize,
}

/// One engine's result in serializable form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlgorithmReport {
    /// Selected edges in selection order.
    pub mst_edges: Vec<EdgeReport>,
    /// Sum of the selected edge weights.
    pub total_cost: i128,
    /// Relative work counter reported by the engine.
    pub operations_count: u64,
    /// Wall-clock time in milliseconds.
    pub execution_time_ms: f64,
}

impl From<&MstResult> for AlgorithmReport {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(EdgeReport::from).collect(),
            total_cost: result.total_cost(),
            operations_count: result.operations(),
            execution_time_ms: result.elapsed_millis(),
        }
    }
}

/// A selected edge in serializable form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EdgeReport {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl From<&Edge> for EdgeReport {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.from().to_owned(),
            to: edge.to().to_owned(),
            weight: edge.weight(),
        }
    }
}

/// Runs Prim then Kruskal over every graph.
///
/// # Examples
/// ```
/// use arbor_cli::report::compare_graphs;
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     vec![Edge::new("A", "B", 1), Edge::new("C", "D", 2)],
/// )?;
/// let report = compare_graphs(&[graph]);
/// let comparison = &report.results[0];
/// assert_eq!(comparison.graph_id, 1);
/// assert_eq!(comparison.prim.total_cost, 1);
/// assert_eq!(comparison.kruskal.total_cost, 3);
/// assert!(comparison.diverged());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "report.compare", skip(graphs), fields(graphs = graphs.len()))]
pub fn compare_graphs(graphs: &[Graph]) -> ComparisonReport {
    let results = graphs
        .iter()
        .zip(1..)
        .map(|(graph, graph_id)| {
            let tree = prim(graph);
            let forest = kruskal(graph);
            let comparison = GraphComparison {
                graph_id,
                input_stats: InputStats {
                    vertices: graph.vertex_count(),
                    edges: graph.edge_count(),
                },
                prim: AlgorithmReport::from(&tree),
                kruskal: AlgorithmReport::from(&forest),
            };
            if comparison.diverged() {
                debug!(
                    graph_id,
                    prim_cost = tree.total_cost(),
                    kruskal_cost = forest.total_cost(),
                    "engines diverged; graph is disconnected"
                );
            }
            comparison
        })
        .collect();
    ComparisonReport { results }
}

/// Writes the report as a pretty-printed JSON results document.
///
/// # Errors
/// Returns [`serde_json::Error`] when serialization or the write fails.
pub fn write_json(report: &ComparisonReport, writer: impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, report)
}

/// Writes the CSV summary: [`CSV_HEADER`] then one row per graph, with times
/// in milliseconds to two decimals.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn write_csv(report: &ComparisonReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in &report.results {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{:.2},{},{}",
            row.graph_id,
            row.input_stats.vertices,
            row.input_stats.edges,
            row.prim.total_cost,
            row.kruskal.total_cost,
            row.prim.execution_time_ms,
            row.kruskal.execution_time_ms,
            row.prim.operations_count,
            row.kruskal.operations_count,
        )?;
    }
    Ok(())
}

/// Writes one human-readable line per graph.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use arbor_cli::report::{compare_graphs, write_summary};
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::new(["A", "B"], vec![Edge::new("A", "B", 4)])?;
/// let mut buffer = Vec::new();
/// write_summary(&compare_graphs(&[graph]), &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "graph 1: 2 vertices, 1 edges; prim cost 4 (1 edges), kruskal cost 4 (1 edges)\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_summary(report: &ComparisonReport, mut writer: impl Write) -> io::Result<()> {
    for row in &report.results {
        write!(
            writer,
            "graph {}: {} vertices, {} edges; prim cost {} ({} edges), kruskal cost {} ({} edges)",
            row.graph_id,
            row.input_stats.vertices,
            row.input_stats.edges,
            row.prim.total_cost,
            row.prim.mst_edges.len(),
            row.kruskal.total_cost,
            row.kruskal.mst_edges.len(),
        )?;
        if row.diverged() {
            write!(writer, " [diverged]")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
