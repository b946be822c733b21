use super::{Color, Difficulty};
use crate::config::{MAX_ROUNDS, SLOT_COUNT};
use rand::Rng;

/// Fold raw noise readings (ADC samples of a floating pin) into a seed.
///
/// Only the low bits of each reading carry noise, so every sample is
/// mixed in after rotating the accumulator.
pub fn seed_from_noise<I>(samples: I) -> u64
where
    I: IntoIterator<Item = u16>,
{
    samples.into_iter().fold(0x9E37_79B9_7F4A_7C15, |seed, sample| {
        (seed.rotate_left(7) ^ u64::from(sample)).wrapping_mul(0x0100_0000_01B3)
    })
}

/// The color sequence the player has to repeat
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    colors: [Color; MAX_ROUNDS],
    len: usize,
}

impl Solution {
    /// Draw `len` colors uniformly at random (capped at [`MAX_ROUNDS`])
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let len = len.min(MAX_ROUNDS);
        let mut colors = [Color::Green; MAX_ROUNDS];
        for slot in colors.iter_mut().take(len) {
            *slot = Color::ALL[rng.gen_range(0..SLOT_COUNT)];
        }
        Self { colors, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors[..self.len]
    }

    /// Colors shown and checked in `round` (0-based): the first `round + 1`
    pub fn prefix(&self, round: usize) -> &[Color] {
        let end = (round + 1).min(self.len);
        &self.colors[..end]
    }
}

/// State of one game from difficulty selection to win or loss
#[derive(Clone, Debug)]
pub struct Session {
    difficulty: Difficulty,
    solution: Solution,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            difficulty,
            solution: Solution::generate(rng, usize::from(difficulty.rounds())),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn rounds(&self) -> usize {
        self.solution.len()
    }

    pub fn is_final_round(&self, round: usize) -> bool {
        round + 1 >= self.rounds()
    }
}
