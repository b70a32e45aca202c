use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::{common::IndexedHeap, core::weight::Weight, graph::WeightedGraph};

use super::hierarchy::LandmarkHierarchy;

/// Runs the pruned single-source searches for every landmark of `level` and
/// records the accepted `(landmark, vertex)` distances into `bunches`.
///
/// `bound` is the finalized witness-distance table of level `level + 1`
/// (all-infinite for the top level). A vertex is accepted, and expanded
/// from, only while its tentative distance from the landmark is strictly
/// below its bound; this is what keeps bunches small. Landmarks that are
/// still present at level `level + 1` are skipped: their searches could
/// never accept anything against the strict bound.
pub(crate) fn bunch_pass<W: Weight>(
    graph: &WeightedGraph<W>,
    hierarchy: &LandmarkHierarchy,
    level: usize,
    bound: &[W],
    heap: &mut IndexedHeap<W>,
    bunches: &mut [FxHashMap<usize, W>],
) {
    for &center in hierarchy.level(level) {
        if hierarchy.contains(level + 1, center) {
            continue;
        }

        pruned_dijkstra(graph, center, bound, heap, bunches);
    }
}

fn pruned_dijkstra<W: Weight>(
    graph: &WeightedGraph<W>,
    center: usize,
    bound: &[W],
    heap: &mut IndexedHeap<W>,
    bunches: &mut [FxHashMap<usize, W>],
) {
    // A bunch search touches an expected O(n^{1/k} log n) vertices, far
    // fewer than the graph has, hence a map instead of a dense array.
    let mut dist = FxHashMap::default();

    debug_assert!(heap.is_empty());

    if !(W::zero() < bound[center]) {
        return;
    }

    dist.insert(center, W::zero());
    heap.push_or_decrease(center, W::zero());

    while let Some((u, u_dist)) = heap.pop() {
        bunches[u].insert(center, u_dist.clone());

        for (v, weight) in graph.neighbors(u) {
            let v_dist = u_dist.clone() + weight.clone();

            if !(v_dist < bound[v]) {
                continue;
            }

            match dist.entry(v) {
                Entry::Occupied(mut current) => {
                    if v_dist < *current.get() {
                        current.insert(v_dist.clone());
                        heap.push_or_decrease(v, v_dist);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(v_dist.clone());
                    heap.push_or_decrease(v, v_dist);
                }
            }
        }
    }
}
