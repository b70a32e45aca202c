use fastrand::Rng;
use fixedbitset::FixedBitSet;

/// Nested landmark sets `A_0 ⊇ A_1 ⊇ … ⊇ A_k = ∅`.
///
/// Level 0 holds every vertex. Each following level keeps a member of the
/// previous one independently with probability `n^(-1/k)`, drawn from the
/// injected generator. The top level is empty unconditionally. A level that
/// runs empty early stays empty for all following levels; that is a valid
/// (degenerate) outcome and is not re-rolled.
#[derive(Debug, Clone)]
pub(crate) struct LandmarkHierarchy {
    levels: Vec<Vec<usize>>,
    member: Vec<FixedBitSet>,
}

impl LandmarkHierarchy {
    pub fn sample(vertex_count: usize, level_count: usize, rng: &mut Rng) -> Self {
        let retain = (vertex_count as f64).powf(-1.0 / level_count as f64);

        let mut levels = Vec::with_capacity(level_count + 1);
        levels.push((0..vertex_count).collect::<Vec<_>>());

        for i in 1..level_count {
            let sampled = levels[i - 1]
                .iter()
                .copied()
                .filter(|_| rng.f64() < retain)
                .collect();
            levels.push(sampled);
        }

        levels.push(Vec::new());

        let member = levels
            .iter()
            .map(|level| {
                let mut bits = FixedBitSet::with_capacity(vertex_count);
                for &v in level {
                    bits.insert(v);
                }
                bits
            })
            .collect();

        Self { levels, member }
    }

    /// Number of sampled levels `k`; `level(k)` exists and is empty.
    pub fn level_count(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn level(&self, i: usize) -> &[usize] {
        &self.levels[i]
    }

    pub fn contains(&self, i: usize, vertex: usize) -> bool {
        self.member[i].contains(vertex)
    }
}
