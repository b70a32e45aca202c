use crate::{common::IndexedHeap, core::weight::Weight, graph::WeightedGraph};

/// Sentinel for "no landmark at this level is reachable".
pub(crate) const NO_WITNESS: usize = usize::MAX;

/// Distances and witness pointers of one hierarchy level.
///
/// `dist[v]` is the shortest distance from `v` to the nearest landmark of
/// the level, `witness[v]` the identity of that landmark. Unreachable
/// vertices keep `W::inf()` and [`NO_WITNESS`].
#[derive(Debug)]
pub(crate) struct WitnessTable<W> {
    pub dist: Vec<W>,
    pub witness: Vec<usize>,
}

/// Multi-source Dijkstra seeded with every landmark of one level at
/// distance zero.
///
/// The relaxation differs from the plain algorithm in one rule: improving
/// the distance of `v` through `u` copies `u`'s *witness*, not `u` itself,
/// so every vertex ends up pointing at the landmark that is the origin of
/// its shortest-path tree, however many hops away.
pub(crate) fn witness_pass<W: Weight>(
    graph: &WeightedGraph<W>,
    sources: &[usize],
    heap: &mut IndexedHeap<W>,
) -> WitnessTable<W> {
    let vertex_count = graph.vertex_count();
    let mut dist = vec![W::inf(); vertex_count];
    let mut witness = vec![NO_WITNESS; vertex_count];

    debug_assert!(heap.is_empty());

    for &source in sources {
        dist[source] = W::zero();
        witness[source] = source;
        heap.push_or_decrease(source, W::zero());
    }

    while let Some((u, u_dist)) = heap.pop() {
        for (v, weight) in graph.neighbors(u) {
            let v_dist = u_dist.clone() + weight.clone();

            if v_dist < dist[v] {
                dist[v] = v_dist.clone();
                witness[v] = witness[u];
                heap.push_or_decrease(v, v_dist);
            }
        }
    }

    WitnessTable { dist, witness }
}
