//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Graph};

use super::types::MstFixture;

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Resolves both endpoints of `edge` to graph positions.
pub(super) fn positions(graph: &Graph, edge: &Edge) -> Result<(usize, usize), TestCaseError> {
    let from = graph.position_of(edge.from());
    let to = graph.position_of(edge.to());
    from.zip(to)
        .ok_or_else(|| TestCaseError::fail(format!("edge {edge} references an unknown vertex")))
}

/// Builds a failure that carries the fixture description.
pub(super) fn failure(fixture: &MstFixture, message: impl AsRef<str>) -> TestCaseError {
    TestCaseError::fail(format!("{} ({})", message.as_ref(), fixture.describe()))
}
