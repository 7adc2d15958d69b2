//! Sequential union-find used by the Kruskal engine.
//!
//! Elements are vertex positions in declaration order. `find` compresses
//! paths iteratively in two passes so deep chains never grow the call stack;
//! `union` attaches the lower-rank root beneath the higher-rank one.

pub(super) struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(element_count: usize) -> Self {
        Self {
            parents: (0..element_count).collect(),
            ranks: vec![0; element_count],
            components: element_count,
        }
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, element: usize) -> usize {
        debug_assert!(element < self.parents.len(), "element {element} was never registered");

        let mut root = element;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = element;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a representative.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);

        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );

        self.parents[child] = parent;
        if self.ranks[parent] == self.ranks[child] {
            self.ranks[parent] = self.ranks[parent].saturating_add(1);
        }

        self.components -= 1;
        true
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
