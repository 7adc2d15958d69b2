//! JSON graph provider: reads graph documents into validated [`arbor_core::Graph`]s.
//!
//! A document holds any number of graphs:
//!
//! ```json
//! { "graphs": [ { "nodes": ["A", "B"],
//!                 "edges": [ { "from": "A", "to": "B", "weight": 3 } ] } ] }
//! ```
//!
//! Each graph is checked for duplicate vertex labels, edges naming undeclared
//! vertices and repeated undirected edges before it is built.

mod document;
mod errors;
mod loader;

pub use document::{EdgeSpec, GraphDocument, GraphSpec};
pub use errors::{JsonGraphError, JsonGraphErrorCode};
pub use loader::{load_graphs_from_path, load_graphs_from_reader, parse_graphs};
