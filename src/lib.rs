//! Approximate distance oracle over weighted graphs.
//!
//! The crate builds a compact index over a [`WeightedGraph`](graph::WeightedGraph)
//! — a randomly thinned landmark hierarchy with per-level witness tables and
//! per-vertex bunches — and answers approximate shortest-path-distance
//! queries in a constant number of table lookups. For a hierarchy with `k`
//! levels, every answer for a reachable pair is within a factor of `2k - 1`
//! of the true distance.
//!
//! See [`algo::DistanceOracle`] for details and an example.

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;

pub use crate::{algo::DistanceOracle, graph::WeightedGraph};
