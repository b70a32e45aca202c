#![no_main]

use distance_oracle::{DistanceOracle, WeightedGraph};
use libfuzzer_sys::fuzz_target;

const VERTEX_COUNT: usize = 16;

fuzz_target!(|input: (u8, u64, Vec<(u8, u8, u8)>)| {
    let (levels, seed, edges) = input;
    let levels = usize::from(levels % 4) + 1;

    let mut graph = WeightedGraph::<u32>::new(VERTEX_COUNT);

    for (u, v, w) in edges {
        let u = usize::from(u) % VERTEX_COUNT;
        let v = usize::from(v) % VERTEX_COUNT;
        graph.add_edge(u, v, u32::from(w)).unwrap();
    }

    let oracle = DistanceOracle::on(&graph)
        .levels(levels)
        .seed(seed)
        .build()
        .unwrap();

    for v in 0..VERTEX_COUNT {
        assert_eq!(oracle.query(v, v).unwrap(), 0);
    }

    for u in 0..VERTEX_COUNT {
        for v in 0..VERTEX_COUNT {
            assert_eq!(oracle.query(u, v).unwrap(), oracle.query(v, u).unwrap());
        }
    }

    assert!(oracle.query(0, VERTEX_COUNT).is_err());
});
