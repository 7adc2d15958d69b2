use std::io;
use std::path::PathBuf;

use arbor_core::GraphError;
use thiserror::Error;

/// Errors raised while loading a graph document.
///
/// `graph` fields are 1-based positions within the document; `edge_index`
/// fields are zero-based positions within that graph's edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonGraphError {
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("graph {graph}: vertex `{vertex}` is declared more than once")]
    DuplicateVertex { graph: usize, vertex: String },
    #[error("graph {graph}: edge {edge_index} references undeclared vertex `{vertex}`")]
    UnknownVertex {
        graph: usize,
        edge_index: usize,
        vertex: String,
    },
    #[error("graph {graph}: edge {edge_index} repeats the undirected edge {from}-{to}")]
    DuplicateEdge {
        graph: usize,
        edge_index: usize,
        from: String,
        to: String,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Stable machine-readable codes for [`JsonGraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum JsonGraphErrorCode {
    Open,
    Json,
    DuplicateVertex,
    UnknownVertex,
    DuplicateEdge,
    Graph,
}

impl JsonGraphErrorCode {
    /// Returns the stable string form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "JSON_GRAPH_OPEN",
            Self::Json => "JSON_GRAPH_SYNTAX",
            Self::DuplicateVertex => "JSON_GRAPH_DUPLICATE_VERTEX",
            Self::UnknownVertex => "JSON_GRAPH_UNKNOWN_VERTEX",
            Self::DuplicateEdge => "JSON_GRAPH_DUPLICATE_EDGE",
            Self::Graph => "JSON_GRAPH_INVALID_GRAPH",
        }
    }
}

impl std::fmt::Display for JsonGraphErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonGraphError {
    /// Returns the stable code for this error.
    #[must_use]
    pub const fn code(&self) -> JsonGraphErrorCode {
        match self {
            Self::Open { .. } => JsonGraphErrorCode::Open,
            Self::Json(_) => JsonGraphErrorCode::Json,
            Self::DuplicateVertex { .. } => JsonGraphErrorCode::DuplicateVertex,
            Self::UnknownVertex { .. } => JsonGraphErrorCode::UnknownVertex,
            Self::DuplicateEdge { .. } => JsonGraphErrorCode::DuplicateEdge,
            Self::Graph(_) => JsonGraphErrorCode::Graph,
        }
    }
}
