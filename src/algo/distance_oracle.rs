//! Build a compact [distance oracle] over a weighted graph and answer
//! approximate distance queries in a constant number of rounds.
//!
//! See available parameters [here](DistanceOracleBuilder#implementations).
//!
//! Preprocessing samples a hierarchy of `k` nested landmark levels, runs
//! one multi-source witness search per level and grows a pruned *bunch* of
//! landmarks around every vertex. A query then walks at most `k` witness
//! hops, alternating between the endpoints, until it finds a landmark that
//! is in the other endpoint's bunch. The answer never underestimates the
//! true distance and overestimates it by a factor of at most `2k - 1`.
//!
//! Expected index size is `O(k · n^{1 + 1/k})`, a tunable trade against
//! the exact all-pairs table.
//!
//! [distance oracle]: https://en.wikipedia.org/wiki/Distance_oracle
//!
//! # Examples
//!
//! ```
//! use distance_oracle::{DistanceOracle, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new(5);
//! graph
//!     .extend_with_edges([
//!         (0, 1, 1.0),
//!         (1, 2, 1.0),
//!         (2, 3, 1.0),
//!         (3, 4, 1.0),
//!         (4, 0, 1.0),
//!     ])
//!     .unwrap();
//!
//! let oracle = DistanceOracle::on(&graph).levels(2).seed(7).build().unwrap();
//!
//! // True distance is 2.0; with two levels the answer is at most 3x that,
//! // and on a 5-cycle in fact at most 3.0.
//! let estimate = oracle.query(0, 2).unwrap();
//! assert!((2.0..=3.0).contains(&estimate));
//! ```

use std::mem;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::weight::Weight;

mod builder;
mod bunch;
mod hierarchy;
mod witness;

pub use builder::DistanceOracleBuilder;

use hierarchy::LandmarkHierarchy;
use witness::NO_WITNESS;

/// Immutable approximate-distance index over a fixed graph.
///
/// Built once by [`DistanceOracle::on`]; afterwards it only serves `&self`
/// queries, so it can be shared freely between threads. Rebuilding after a
/// graph change means building a new, unrelated oracle.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DistanceOracle<W = f64> {
    hierarchy: LandmarkHierarchy,
    // delta[i][v] and witness[i][v] for levels 0..k: the distance from v
    // to the nearest level-i landmark and that landmark's id. Level k is
    // implicit (empty, all-infinite).
    delta: Vec<Vec<W>>,
    witness: Vec<Vec<usize>>,
    // bunches[v] maps each landmark of B(v) to its exact distance from v.
    bunches: Vec<FxHashMap<usize, W>>,
}

impl<W: Weight> DistanceOracle<W> {
    /// Number of vertices of the indexed graph.
    pub fn vertex_count(&self) -> usize {
        self.bunches.len()
    }

    /// Number of hierarchy levels `k` the oracle was built with.
    pub fn level_count(&self) -> usize {
        self.delta.len()
    }

    /// The worst-case multiplicative error `2k - 1` of [`query`](Self::query)
    /// answers on reachable pairs.
    pub fn stretch_bound(&self) -> usize {
        2 * self.level_count() - 1
    }

    /// Number of landmarks sampled into `level`.
    ///
    /// # Panics
    ///
    /// Panics if `level > k`.
    pub fn landmark_count(&self, level: usize) -> usize {
        self.hierarchy.level(level).len()
    }

    /// The landmarks vertex `vertex` stores an exact distance to, as
    /// `(landmark, distance)` pairs in unspecified order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn bunch(&self, vertex: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.bunches[vertex].iter().map(|(&landmark, dist)| (landmark, dist))
    }

    /// Size of the bunch of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn bunch_len(&self, vertex: usize) -> usize {
        self.bunches[vertex].len()
    }

    /// Approximate shortest-path distance between `u` and `v`.
    ///
    /// The answer lies in `[d(u, v), (2k - 1) · d(u, v)]` for reachable
    /// pairs and is [`Weight::inf`] for unreachable ones. `query(u, u)`
    /// is zero. Fails only when an endpoint is out of range.
    pub fn query(&self, u: usize, v: usize) -> Result<W, QueryError> {
        let vertex_count = self.vertex_count();
        if u >= vertex_count {
            return Err(QueryError::VertexOutOfRange(u));
        }
        if v >= vertex_count {
            return Err(QueryError::VertexOutOfRange(v));
        }

        // The witness walk is not symmetric in its arguments; evaluating
        // on the ordered pair makes the answer so.
        let (mut u, mut v) = if u <= v { (u, v) } else { (v, u) };

        let levels = self.level_count();
        let mut w = u;
        // d(w, u), maintained as delta[i][u] across rounds.
        let mut to_u = W::zero();

        let mut i = 0;
        loop {
            if let Some(to_v) = self.bunches[v].get(&w) {
                return Ok(to_u + to_v.clone());
            }

            i += 1;
            if i == levels {
                // The empty top level is a universal witness at infinite
                // distance: the endpoints are not connected.
                return Ok(W::inf());
            }

            mem::swap(&mut u, &mut v);
            w = self.witness[i][u];
            if w == NO_WITNESS {
                return Ok(W::inf());
            }
            to_u = self.delta[i][u].clone();
        }
    }
}

/// The error encountered while building a [`DistanceOracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The hierarchy needs at least one level.
    #[error("hierarchy must have at least one level")]
    LevelCountZero,

    /// The graph has no vertices to index.
    #[error("graph has no vertices")]
    EmptyGraph,
}

/// The error encountered by [`DistanceOracle::query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An endpoint is not a vertex of the indexed graph.
    #[error("vertex {0} is out of range")]
    VertexOutOfRange(usize),
}
