use rand::prelude::*;

use super::*;

/// Draws a random row and column until enough distinct positions are mined. Unbounded in principle, but
/// terminates quickly for a board this sparse.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSampler {
    seed: u64,
}

impl RejectionSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RejectionSampler {
    fn generate(self) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut layout = MineLayout::empty();
        let mut draws = 0usize;

        while layout.mine_count() < MINES {
            let pos = (rng.random_range(0..ROWS), rng.random_range(0..COLS));
            layout.place(pos);
            draws += 1;
        }

        log::debug!(
            "Rejection sampling with seed {} placed {} mines in {} draws",
            self.seed,
            layout.mine_count(),
            draws
        );
        layout
    }
}

/// Samples distinct flat indices without replacement, so it runs in bounded time.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleSampler {
    seed: u64,
}

impl ShuffleSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ShuffleSampler {
    fn generate(self) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut layout = MineLayout::empty();

        for index in rand::seq::index::sample(&mut rng, CELLS, MINES) {
            layout.place(from_flat_index(index));
        }

        // double check mine count
        if layout.mine_count() != MINES {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                MINES
            );
        }
        log::debug!("Shuffle sampling with seed {} placed {} mines", self.seed, layout.mine_count());
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_sampler_places_exact_mine_count() {
        for seed in 0..200 {
            let layout = RejectionSampler::new(seed).generate();
            assert_eq!(layout.mine_count(), MINES);
            assert_eq!(layout.iter_mines().count(), MINES);
        }
    }

    #[test]
    fn shuffle_sampler_places_exact_mine_count() {
        for seed in 0..200 {
            let layout = ShuffleSampler::new(seed).generate();
            assert_eq!(layout.mine_count(), MINES);
            assert_eq!(layout.iter_mines().count(), MINES);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(RejectionSampler::new(7).generate(), RejectionSampler::new(7).generate());
        assert_eq!(ShuffleSampler::new(7).generate(), ShuffleSampler::new(7).generate());
    }

    #[test]
    fn different_seeds_vary_the_layout() {
        let first = RejectionSampler::new(1).generate();
        assert!((2..20).any(|seed| RejectionSampler::new(seed).generate() != first));
    }
}
