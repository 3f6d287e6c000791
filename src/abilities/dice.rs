//! Dice rolling for ability generation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable dice roller
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: ChaCha8Rng,
}

impl DiceRoller {
    /// Deterministic when `seed` is given, entropy-seeded otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    /// One die; a zero-sided die is treated as a d1
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides.max(1))
    }

    pub fn roll(&mut self, count: usize, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(sides)).collect()
    }

    /// 4d6, dropping the lowest die
    pub fn roll_ability_score(&mut self) -> u8 {
        let mut dice = self.roll(4, 6);
        dice.sort_unstable();
        dice[1..].iter().sum::<u32>() as u8
    }

    /// Six ability scores in roll order
    pub fn roll_ability_set(&mut self) -> [u8; 6] {
        let mut set = [0u8; 6];
        for score in set.iter_mut() {
            *score = self.roll_ability_score();
        }
        tracing::debug!("Rolled ability set {:?}", set);
        set
    }
}
