//! Immutable weighted undirected graph with a derived adjacency index.
//!
//! Vertices are opaque string labels kept in declaration order; that order
//! seeds [`crate::PrimEngine`]. Edges are resolved to vertex positions once at
//! construction so the engines can work on dense tables instead of hashing
//! labels in their inner loops.

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use tracing::warn;

use crate::error::{GraphError, Result};

/// An undirected weighted edge between two vertex labels.
///
/// `Edge::new("A", "B", w)` and `Edge::new("B", "A", w)` describe the same
/// connection; the stored orientation is kept only for reporting.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new("A", "B", 4);
/// assert_eq!(edge.to_string(), "A-B(4)");
/// assert!(edge.connects("B", "A"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: String,
    to: String,
    weight: i64,
}

impl Edge {
    /// Creates an edge between `from` and `to` with the given weight.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the first endpoint as declared.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &str { &self.from }

    /// Returns the second endpoint as declared.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> &str { &self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns `true` when the edge joins `left` and `right` in either
    /// orientation.
    #[must_use]
    pub fn connects(&self, left: &str, right: &str) -> bool {
        (self.from == left && self.to == right) || (self.from == right && self.to == left)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.weight)
    }
}

/// A validated, immutable weighted undirected graph.
///
/// Construction checks that every edge endpoint is a declared vertex and
/// builds the adjacency index in `O(V + E)`. No method mutates the graph
/// afterwards, so a `Graph` can be shared freely between threads.
///
/// Duplicate vertex labels are not rejected here; a repeated label resolves
/// to its first occurrence and later copies stay isolated.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::new(["A", "B"], vec![Edge::new("A", "B", 1)])?;
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.incident_edges("B").count(), 1);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<String>,
    edges: Vec<Edge>,
    positions: HashMap<String, usize>,
    endpoints: Vec<(usize, usize)>,
    incident: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from a vertex sequence and an edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertexReference`] for the first edge (in
    /// list order) naming a vertex that is not part of `vertices`. The `from`
    /// endpoint is checked before `to`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, GraphError};
    ///
    /// let err = Graph::new(["A", "B"], vec![Edge::new("A", "C", 1)]).unwrap_err();
    /// assert!(matches!(err, GraphError::UnknownVertexReference { ref vertex, .. } if vertex == "C"));
    /// ```
    pub fn new<V, S>(vertices: V, edges: Vec<Edge>) -> Result<Self>
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();

        let mut positions = HashMap::with_capacity(vertices.len());
        for (position, label) in vertices.iter().enumerate() {
            positions.entry(label.clone()).or_insert(position);
        }

        let mut endpoints = Vec::with_capacity(edges.len());
        for (edge_index, edge) in edges.iter().enumerate() {
            let from = resolve(&positions, edge.from(), edge_index)?;
            let to = resolve(&positions, edge.to(), edge_index)?;
            endpoints.push((from, to));
        }

        let mut incident = vec![Vec::new(); vertices.len()];
        for (edge_id, &(from, to)) in endpoints.iter().enumerate() {
            incident[from].push(edge_id);
            incident[to].push(edge_id);
        }

        Ok(Self {
            vertices,
            edges,
            positions,
            endpoints,
            incident,
        })
    }

    /// Returns the number of declared vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph declares no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex labels in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[String] { &self.vertices }

    /// Returns the edges in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when `label` is a declared vertex.
    #[must_use]
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Returns the edges incident to `label` in edge declaration order.
    ///
    /// An unknown label yields an empty iterator.
    pub fn incident_edges(&self, label: &str) -> IncidentEdges<'_> {
        let ids = self
            .position_of(label)
            .map_or(&[][..], |position| self.incident_ids(position));
        IncidentEdges::new(&self.edges, ids)
    }

    /// Returns a read-only view of the adjacency index.
    #[must_use]
    pub fn adjacency(&self) -> AdjacencyIndex<'_> {
        AdjacencyIndex { graph: self }
    }

    pub(crate) fn position_of(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub(crate) fn endpoints(&self, edge_id: usize) -> (usize, usize) {
        self.endpoints[edge_id]
    }

    pub(crate) fn incident_ids(&self, position: usize) -> &[usize] {
        &self.incident[position]
    }

    pub(crate) fn edge(&self, edge_id: usize) -> &Edge {
        &self.edges[edge_id]
    }
}

fn resolve(positions: &HashMap<String, usize>, label: &str, edge_index: usize) -> Result<usize> {
    positions.get(label).copied().ok_or_else(|| {
        warn!(vertex = label, edge_index, "edge references an undeclared vertex");
        GraphError::UnknownVertexReference {
            vertex: label.to_owned(),
            edge_index,
        }
    })
}

/// Read-only view mapping each vertex to its incident edges.
///
/// Every edge appears under both of its endpoints; a self-loop appears twice
/// under its single endpoint.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyIndex<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyIndex<'a> {
    /// Returns the incident edges of `label`, or `None` for an unknown label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<IncidentEdges<'a>> {
        let graph = self.graph;
        graph
            .position_of(label)
            .map(|position| IncidentEdges::new(&graph.edges, graph.incident_ids(position)))
    }

    /// Iterates over `(vertex, incident edges)` pairs in vertex declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, IncidentEdges<'a>)> + 'a {
        let graph = self.graph;
        graph
            .vertices
            .iter()
            .zip(&graph.incident)
            .map(|(label, ids)| (label.as_str(), IncidentEdges::new(&graph.edges, ids)))
    }

    /// Returns the number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.incident.len()
    }

    /// Returns `true` when no vertex is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.incident.is_empty()
    }
}

/// Iterator over the edges incident to one vertex.
#[derive(Clone, Debug)]
pub struct IncidentEdges<'a> {
    edges: &'a [Edge],
    ids: slice::Iter<'a, usize>,
}

impl<'a> IncidentEdges<'a> {
    fn new(edges: &'a [Edge], ids: &'a [usize]) -> Self {
        Self {
            edges,
            ids: ids.iter(),
        }
    }
}

impl<'a> Iterator for IncidentEdges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().and_then(|&id| self.edges.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for IncidentEdges<'_> {}

impl FusedIterator for IncidentEdges<'_> {}
