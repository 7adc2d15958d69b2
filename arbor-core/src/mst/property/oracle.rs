//! Dense-matrix oracle for MST property tests.
//!
//! Runs the textbook `O(V^2)` Prim over an adjacency matrix that keeps only
//! the lightest edge between each pair, restarting from every unvisited
//! vertex. Shares no code with either engine.

/// Minimum spanning forest summary computed by [`dense_forest`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the minimum spanning forest.
    pub total_cost: i128,
    /// Number of forest edges (`V - C`).
    pub edge_count: usize,
    /// Number of connected components, counting isolated vertices.
    pub component_count: usize,
    /// Weight of the minimum spanning tree of vertex `0`'s component.
    pub seed_cost: i128,
    /// Number of vertices in vertex `0`'s component.
    pub seed_size: usize,
}

/// Computes the minimum spanning forest of `node_count` vertices.
///
/// Self-loops are ignored. Edges must reference vertices below `node_count`.
pub(super) fn dense_forest(node_count: usize, edges: &[(usize, usize, i64)]) -> OracleForest {
    let mut matrix = vec![vec![None::<i64>; node_count]; node_count];
    for &(from, to, weight) in edges {
        if from == to {
            continue;
        }
        if matrix[from][to].is_none_or(|current| weight < current) {
            matrix[from][to] = Some(weight);
            matrix[to][from] = Some(weight);
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut forest = OracleForest::default();
    for root in 0..node_count {
        if in_tree[root] {
            continue;
        }
        let (cost, size) = grow(&matrix, &mut in_tree, root);
        forest.component_count += 1;
        forest.total_cost += cost;
        forest.edge_count += size - 1;
        if root == 0 {
            forest.seed_cost = cost;
            forest.seed_size = size;
        }
    }
    forest
}

fn grow(matrix: &[Vec<Option<i64>>], in_tree: &mut [bool], root: usize) -> (i128, usize) {
    let mut best = vec![None::<i64>; matrix.len()];
    best[root] = Some(0);
    let mut cost = 0;
    let mut size = 0;

    loop {
        let next = (0..matrix.len())
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| best[vertex].map(|weight| (weight, vertex)))
            .min();
        let Some((weight, vertex)) = next else {
            break;
        };
        in_tree[vertex] = true;
        cost += i128::from(weight);
        size += 1;

        for (neighbour, slot) in matrix[vertex].iter().enumerate() {
            if in_tree[neighbour] {
                continue;
            }
            if let Some(candidate) = *slot
                && best[neighbour].is_none_or(|current| candidate < current)
            {
                best[neighbour] = Some(candidate);
            }
        }
    }
    (cost, size)
}
