use fastrand::Rng;
use rustc_hash::FxHashMap;

use crate::{common::IndexedHeap, core::weight::Weight, graph::WeightedGraph};

use super::{
    bunch::bunch_pass, hierarchy::LandmarkHierarchy, witness::witness_pass, BuildError,
    DistanceOracle,
};

/// Configures and runs the preprocessing that produces a
/// [`DistanceOracle`].
///
/// Obtained from [`DistanceOracle::on`]. The number of levels defaults
/// to 2 (stretch 3); the landmark sampling is seeded from entropy unless
/// [`seed`](Self::seed) pins it down.
pub struct DistanceOracleBuilder<'a, W> {
    graph: &'a WeightedGraph<W>,
    levels: usize,
    seed: Option<u64>,
}

impl<W: Weight> DistanceOracle<W> {
    /// Starts building an oracle over `graph`.
    pub fn on(graph: &WeightedGraph<W>) -> DistanceOracleBuilder<'_, W> {
        DistanceOracleBuilder {
            graph,
            levels: 2,
            seed: None,
        }
    }
}

impl<'a, W: Weight> DistanceOracleBuilder<'a, W> {
    /// Sets the number of hierarchy levels `k`. Larger `k` trades answer
    /// quality (stretch `2k - 1`) for index size.
    pub fn levels(self, levels: usize) -> Self {
        Self { levels, ..self }
    }

    /// Seeds the landmark sampling, making the build reproducible.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Runs the preprocessing pipeline: sample the hierarchy, compute the
    /// witness tables top level down, then grow the bunches against each
    /// next level's finalized distances.
    ///
    /// Validation failures surface before any search runs. On success the
    /// returned oracle is complete and immutable; on error nothing of the
    /// partial build is observable.
    pub fn build(self) -> Result<DistanceOracle<W>, BuildError> {
        let Self {
            graph,
            levels,
            seed,
        } = self;

        if levels == 0 {
            return Err(BuildError::LevelCountZero);
        }

        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            return Err(BuildError::EmptyGraph);
        }

        let mut rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        let hierarchy = LandmarkHierarchy::sample(vertex_count, levels, &mut rng);
        let mut heap = IndexedHeap::new(vertex_count);

        let mut delta = vec![Vec::new(); levels];
        let mut witness = vec![Vec::new(); levels];

        for i in (0..levels).rev() {
            let table = witness_pass(graph, hierarchy.level(i), &mut heap);
            delta[i] = table.dist;
            witness[i] = table.witness;
        }

        // Nested levels make the witness distances pointwise non-decreasing
        // with the level.
        debug_assert!((1..levels)
            .all(|i| (0..vertex_count).all(|v| delta[i - 1][v] <= delta[i][v])));

        // The bound of the top level is the implicit all-infinite
        // `delta[k]`; every lower level prunes against the level above it.
        let top_bound = vec![W::inf(); vertex_count];
        let mut bunches = vec![FxHashMap::default(); vertex_count];

        for i in (0..levels).rev() {
            let bound = if i + 1 == levels {
                &top_bound
            } else {
                &delta[i + 1]
            };

            bunch_pass(graph, &hierarchy, i, bound, &mut heap, &mut bunches);
        }

        Ok(DistanceOracle {
            hierarchy,
            delta,
            witness,
            bunches,
        })
    }
}
