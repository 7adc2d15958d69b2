//! Strategy builders for MST property-based tests.
//!
//! Every fixture is derived from a single `u64` seed through [`SmallRng`], so
//! a failing case can be replayed from the seed printed by proptest. Generated
//! graphs include the awkward inputs the engines must tolerate: parallel
//! edges, self-loops, negative weights and isolated vertices.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 48;
/// Dense graphs stay smaller to bound the quadratic edge count.
const DENSE_MAX_NODES: usize = 24;
const EXTREME_WEIGHTS: [i64; 7] = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX];

/// Generates MST fixtures across all six weight distributions.
///
/// Biased towards `ManyIdentical`, where Kruskal and Prim are most likely to
/// pick different (but equally cheap) edges.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicit distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let draft = match distribution {
        WeightDistribution::Unique => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            random_pairs(rng, 0, node_count, (0.1, 0.4), |r| {
                r.gen_range(-1_000_000..1_000_000)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            random_pairs(rng, 0, node_count, (0.2, 0.6), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            random_pairs(rng, 0, node_count, (0.7, 0.95), |r| r.gen_range(1..1_000))
        }
        WeightDistribution::Disconnected => disconnected(rng),
        WeightDistribution::Extreme => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            random_pairs(rng, 0, node_count, (0.3, 0.9), |r| {
                EXTREME_WEIGHTS[r.gen_range(0..EXTREME_WEIGHTS.len())]
            })
        }
    };
    MstFixture {
        node_count: draft.node_count,
        edges: draft.edges,
        distribution,
    }
}

/// Edge list under construction together with its vertex range.
struct Draft {
    node_count: usize,
    edges: Vec<(usize, usize, i64)>,
}

/// Adds each unordered pair in `offset..offset + size` with a probability
/// sampled from `probability`. Orientation is randomised, and a parallel edge
/// or self-loop is occasionally appended to stress the engines' filtering.
fn random_pairs(
    rng: &mut SmallRng,
    offset: usize,
    size: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Draft {
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for left in offset..offset + size {
        for right in left + 1..offset + size {
            if !rng.gen_bool(edge_probability) {
                continue;
            }
            let (from, to) = if rng.gen_bool(0.5) {
                (left, right)
            } else {
                (right, left)
            };
            edges.push((from, to, weight(rng)));
            if rng.gen_bool(0.05) {
                edges.push((to, from, weight(rng)));
            }
        }
        if rng.gen_bool(0.03) {
            edges.push((left, left, weight(rng)));
        }
    }
    if edges.is_empty() && size >= 2 {
        edges.push((offset, offset + 1, weight(rng)));
    }
    Draft {
        node_count: offset + size,
        edges,
    }
}

/// Random spanning tree over a shuffled vertex order plus `0.5n..=n` extras.
fn sparse(rng: &mut SmallRng) -> Draft {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, i64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(-50..500)))
        .collect();

    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        edges.push((from, to, rng.gen_range(-50..500)));
    }

    Draft { node_count, edges }
}

/// Two to five components with no cross-component edges; some components
/// are singletons, including occasionally the seed.
fn disconnected(rng: &mut SmallRng) -> Draft {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(1..=10);
        let component = random_pairs(rng, offset, size, (0.3, 0.8), |r| r.gen_range(1..100));
        edges.extend(component.edges);
        offset += size;
    }
    Draft {
        node_count: offset,
        edges,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for index in (1..slice.len()).rev() {
        let other = rng.gen_range(0..=index);
        slice.swap(index, other);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            1 => Just(Self::Extreme),
        ]
    }
}
