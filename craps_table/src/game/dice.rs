//! Dice sources.
//!
//! The table never draws randomness itself; hosts hand it something that
//! implements [`RollSource`]. Any `FnMut() -> (u8, u8)` closure works, which
//! is how a verifiable or remote source plugs in.

use enum_dispatch::enum_dispatch;
use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};
use std::{collections::VecDeque, fmt};

use super::constants::DIE_FACES;

#[enum_dispatch]
pub trait RollSource {
    /// Throws both dice. Values outside `1..=6` are rejected by the table.
    fn roll(&mut self) -> (u8, u8);
}

impl<F> RollSource for F
where
    F: FnMut() -> (u8, u8),
{
    fn roll(&mut self) -> (u8, u8) {
        self()
    }
}

/// Dice backed by the thread-local generator.
pub struct ThreadDice {
    rng: ThreadRng,
}

impl ThreadDice {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadDice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThreadDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadDice").finish_non_exhaustive()
    }
}

impl RollSource for ThreadDice {
    fn roll(&mut self) -> (u8, u8) {
        (
            self.rng.random_range(1..=DIE_FACES),
            self.rng.random_range(1..=DIE_FACES),
        )
    }
}

/// Reproducible dice. The same seed always throws the same sequence.
#[derive(Debug, Clone)]
pub struct SeededDice {
    seed: u64,
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RollSource for SeededDice {
    fn roll(&mut self) -> (u8, u8) {
        (
            self.rng.random_range(1..=DIE_FACES),
            self.rng.random_range(1..=DIE_FACES),
        )
    }
}

/// Dice that throw a fixed list of rolls, for replays and tests.
///
/// Once exhausted it throws `(0, 0)`, which the table refuses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<(u8, u8)>,
}

impl ScriptedDice {
    pub fn new<I>(rolls: I) -> Self
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn push(&mut self, d1: u8, d2: u8) {
        self.rolls.push_back((d1, d2));
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedDice {
    fn roll(&mut self) -> (u8, u8) {
        self.rolls.pop_front().unwrap_or((0, 0))
    }
}

/// Any of the built-in dice sources.
#[enum_dispatch(RollSource)]
#[derive(Debug)]
pub enum DiceSource {
    Thread(ThreadDice),
    Seeded(SeededDice),
    Scripted(ScriptedDice),
}

impl DiceSource {
    /// Seeded dice when a seed is given, thread-local dice otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SeededDice::new(seed).into(),
            None => ThreadDice::new().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range((d1, d2): (u8, u8)) -> bool {
        (1..=6).contains(&d1) && (1..=6).contains(&d2)
    }

    #[test]
    fn test_thread_dice_in_range() {
        let mut dice = ThreadDice::new();
        for _ in 0..1000 {
            assert!(in_range(dice.roll()));
        }
    }

    #[test]
    fn test_seeded_dice_reproducible() {
        let mut a = SeededDice::new(42);
        let mut b = SeededDice::new(42);
        let first: Vec<_> = (0..50).map(|_| a.roll()).collect();
        let second: Vec<_> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(first, second);
        assert!(first.iter().copied().all(in_range));
    }

    #[test]
    fn test_seeded_dice_cover_every_face() {
        let mut dice = SeededDice::new(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let (d1, d2) = dice.roll();
            seen[usize::from(d1) - 1] = true;
            seen[usize::from(d2) - 1] = true;
        }
        assert!(seen.iter().all(|face| *face));
    }

    #[test]
    fn test_scripted_dice_then_exhausted() {
        let mut dice = ScriptedDice::new([(3, 4), (6, 6)]);
        assert_eq!(dice.roll(), (3, 4));
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(), (6, 6));
        assert_eq!(dice.roll(), (0, 0));
    }

    #[test]
    fn test_closure_is_a_roll_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            (2, 2)
        };
        assert_eq!(RollSource::roll(&mut source), (2, 2));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_dice_source_dispatch() {
        let mut source: DiceSource = ScriptedDice::new([(1, 2)]).into();
        assert_eq!(source.roll(), (1, 2));

        let mut seeded = DiceSource::from_seed(Some(9));
        let mut reference = SeededDice::new(9);
        assert_eq!(seeded.roll(), reference.roll());
    }
}
