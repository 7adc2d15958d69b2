//! Property 2: structural invariants of both engines' output.
//!
//! - **Membership**: every selected edge is one of the graph's edges.
//! - **No self-loops**: a loop can never join two components.
//! - **Acyclicity**: union-find over the selected edges never closes a cycle.
//! - **Edge budget**: Kruskal selects `V - C` edges; Prim selects one fewer
//!   than the size of the seed component and stays inside it.
//! - **Cost bookkeeping**: `total_cost` equals the sum of selected weights.

use proptest::test_runner::TestCaseResult;

use crate::{Graph, MstResult, kruskal, prim};

use super::helpers::{failure, find_root, positions};
use super::oracle::dense_forest;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = dense_forest(fixture.node_count, &fixture.edges);
    let forest = kruskal(&graph);
    let tree = prim(&graph);

    for result in [&forest, &tree] {
        validate_membership(fixture, &graph, result)?;
        validate_acyclic(fixture, &graph, result)?;
        validate_cost(fixture, result)?;
    }

    if forest.edge_count() != fixture.node_count - oracle.component_count {
        return Err(failure(
            fixture,
            format!(
                "kruskal selected {} edges for {} components",
                forest.edge_count(),
                oracle.component_count
            ),
        ));
    }
    if forest.is_spanning_tree(graph.vertex_count()) != (oracle.component_count == 1) {
        return Err(failure(fixture, "kruskal spanning-tree flag disagrees with connectivity"));
    }

    let expected_tree_edges = oracle.seed_size.saturating_sub(1);
    if tree.edge_count() != expected_tree_edges {
        return Err(failure(
            fixture,
            format!(
                "prim selected {} edges, seed component needs {expected_tree_edges}",
                tree.edge_count()
            ),
        ));
    }
    if tree.edge_count() > forest.edge_count() {
        return Err(failure(fixture, "prim selected more edges than kruskal"));
    }
    validate_within_seed_component(fixture, &graph, &tree)
}

fn validate_membership(fixture: &MstFixture, graph: &Graph, result: &MstResult) -> TestCaseResult {
    for edge in result.edges() {
        if edge.from() == edge.to() {
            return Err(failure(
                fixture,
                format!("{} selected self-loop {edge}", result.algorithm()),
            ));
        }
        if !graph.edges().contains(edge) {
            return Err(failure(
                fixture,
                format!("{} selected {edge}, which is not in the graph", result.algorithm()),
            ));
        }
    }
    Ok(())
}

fn validate_acyclic(fixture: &MstFixture, graph: &Graph, result: &MstResult) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for edge in result.edges() {
        let (from, to) = positions(graph, edge)?;
        let from_root = find_root(&mut parent, from);
        let to_root = find_root(&mut parent, to);
        if from_root == to_root {
            return Err(failure(
                fixture,
                format!("{} closed a cycle with {edge}", result.algorithm()),
            ));
        }
        parent[to_root] = from_root;
    }
    Ok(())
}

fn validate_cost(fixture: &MstFixture, result: &MstResult) -> TestCaseResult {
    let summed: i128 = result
        .edges()
        .iter()
        .map(|edge| i128::from(edge.weight()))
        .sum();
    if summed == result.total_cost() {
        Ok(())
    } else {
        Err(failure(
            fixture,
            format!(
                "{} reports cost {} but its edges sum to {summed}",
                result.algorithm(),
                result.total_cost()
            ),
        ))
    }
}

/// Every Prim edge must touch only vertices connected to position `0`
/// through the input graph.
fn validate_within_seed_component(
    fixture: &MstFixture,
    graph: &Graph,
    tree: &MstResult,
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for edge in graph.edges() {
        let (from, to) = positions(graph, edge)?;
        let from_root = find_root(&mut parent, from);
        let to_root = find_root(&mut parent, to);
        parent[to_root] = from_root;
    }
    for edge in tree.edges() {
        let (from, to) = positions(graph, edge)?;
        let seed_root = find_root(&mut parent, 0);
        if find_root(&mut parent, from) != seed_root || find_root(&mut parent, to) != seed_root {
            return Err(failure(
                fixture,
                format!("prim selected {edge} outside the seed component"),
            ));
        }
    }
    Ok(())
}
