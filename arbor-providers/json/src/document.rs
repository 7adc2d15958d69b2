//! Serde model of the graph document.

use serde::{Deserialize, Serialize};

/// Top-level document: an ordered list of graphs.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GraphDocument {
    /// Graphs in file order; reported with 1-based positions.
    pub graphs: Vec<GraphSpec>,
}

/// One graph as written in the document.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GraphSpec {
    /// Vertex labels in declaration order. The first label seeds Prim.
    pub nodes: Vec<String>,
    /// Undirected weighted edges in declaration order.
    pub edges: Vec<EdgeSpec>,
}

/// One undirected edge as written in the document.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EdgeSpec {
    /// First endpoint label.
    pub from: String,
    /// Second endpoint label.
    pub to: String,
    /// Integer weight; may be negative.
    pub weight: i64,
}

impl EdgeSpec {
    /// Endpoint pair in a canonical order, so `A-B` and `B-A` compare equal.
    pub(crate) fn undirected_key(&self) -> (&str, &str) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}
