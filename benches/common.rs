#![allow(dead_code)]

use distance_oracle::WeightedGraph;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x3c91_d6f0_52ab_77e;

/// Random undirected graph with roughly `density * n * (n - 1) / 2` edges
/// and weights in `1..100`.
pub fn oracle_random(vertex_count: usize, density: f32, rng: &mut Rng) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new(vertex_count);
    let edge_count = ((vertex_count * (vertex_count - 1) / 2) as f32 * density) as usize;

    while graph.edge_count() < edge_count {
        let u = rng.usize(0..vertex_count);
        let v = rng.usize(0..vertex_count);

        if u != v {
            graph.add_edge(u, v, rng.u32(1..100)).unwrap();
        }
    }

    graph
}

/// The same random model built as a petgraph graph for the exact-Dijkstra
/// baseline.
pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), u32, Undirected> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let edge_count = ((vertex_count * (vertex_count - 1) / 2) as f32 * density) as usize;

    while graph.edge_count() < edge_count {
        let u = rng.usize(0..vertex_count);
        let v = rng.usize(0..vertex_count);

        if u != v {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(1..100));
        }
    }

    graph
}
