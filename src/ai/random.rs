use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::StrategyError;
use crate::game::{Board, Player};

use super::strategy::Strategy;

/// A strategy that selects uniformly at random from playable columns.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible selection from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn authors(&self) -> &str {
        "Random"
    }

    fn play(&mut self, board: &Board, _player: Player) -> Result<usize, StrategyError> {
        let columns = board.playable_columns();
        if columns.is_empty() {
            return Err(StrategyError::NoPlayableColumn);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }
}
