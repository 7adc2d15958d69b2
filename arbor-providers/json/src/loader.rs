//! Document parsing and per-graph validation.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arbor_core::{Edge, Graph};
use tracing::{debug, instrument, warn};

use crate::document::{GraphDocument, GraphSpec};
use crate::errors::JsonGraphError;

/// Loads every graph from the JSON document at `path`.
///
/// # Errors
/// Returns [`JsonGraphError::Open`] when the file cannot be opened, and any
/// error documented on [`load_graphs_from_reader`].
#[instrument(name = "json.load_path", skip(path), fields(path = %path.as_ref().display()), err)]
pub fn load_graphs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Graph>, JsonGraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| JsonGraphError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_graphs_from_reader(BufReader::new(file))
}

/// Loads every graph from a JSON document read from `reader`.
///
/// # Errors
/// Returns [`JsonGraphError::Json`] for malformed or mis-shaped input and the
/// validation variants for the first offending graph in document order.
pub fn load_graphs_from_reader<R: Read>(reader: R) -> Result<Vec<Graph>, JsonGraphError> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    build_graphs(document)
}

/// Parses every graph from an in-memory JSON document.
///
/// # Errors
/// As for [`load_graphs_from_reader`].
///
/// # Examples
/// ```
/// use arbor_providers_json::parse_graphs;
///
/// let graphs = parse_graphs(
///     r#"{"graphs":[{"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]}]}"#,
/// )?;
/// assert_eq!(graphs.len(), 1);
/// assert_eq!(graphs[0].edge_count(), 1);
/// # Ok::<(), arbor_providers_json::JsonGraphError>(())
/// ```
pub fn parse_graphs(json: &str) -> Result<Vec<Graph>, JsonGraphError> {
    let document: GraphDocument = serde_json::from_str(json)?;
    build_graphs(document)
}

fn build_graphs(document: GraphDocument) -> Result<Vec<Graph>, JsonGraphError> {
    let graphs = document
        .graphs
        .into_iter()
        .zip(1..)
        .map(|(spec, position)| build_graph(position, spec))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(graphs = graphs.len(), "graph document loaded");
    Ok(graphs)
}

fn build_graph(position: usize, spec: GraphSpec) -> Result<Graph, JsonGraphError> {
    validate(position, &spec).inspect_err(|error| {
        warn!(graph = position, error = %error, "rejecting graph");
    })?;
    let edges = spec
        .edges
        .into_iter()
        .map(|edge| Edge::new(edge.from, edge.to, edge.weight))
        .collect();
    Ok(Graph::new(spec.nodes, edges)?)
}

fn validate(position: usize, spec: &GraphSpec) -> Result<(), JsonGraphError> {
    let mut declared = HashSet::with_capacity(spec.nodes.len());
    for node in &spec.nodes {
        if !declared.insert(node.as_str()) {
            return Err(JsonGraphError::DuplicateVertex {
                graph: position,
                vertex: node.clone(),
            });
        }
    }

    let mut seen = HashSet::with_capacity(spec.edges.len());
    for (edge_index, edge) in spec.edges.iter().enumerate() {
        if let Some(missing) = [&edge.from, &edge.to]
            .into_iter()
            .find(|label| !declared.contains(label.as_str()))
        {
            return Err(JsonGraphError::UnknownVertex {
                graph: position,
                edge_index,
                vertex: missing.clone(),
            });
        }
        if !seen.insert(edge.undirected_key()) {
            return Err(JsonGraphError::DuplicateEdge {
                graph: position,
                edge_index,
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }
    Ok(())
}
