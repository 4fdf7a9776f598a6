//! Selection among equally scored candidate moves.
//!
//! The search collects every move that reaches the extremal score and asks a
//! `TieBreak` to pick one. Production play uses `RandomTieBreak`; tests swap
//! in `FirstCandidate` or `LastCandidate` to assert the exact move chosen.

use rand::prelude::IndexedRandom;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::game_state::othello_types::Move;

pub trait TieBreak {
    /// Pick one of `candidates`, or `None` when the slice is empty.
    fn pick(&mut self, candidates: &[Move]) -> Option<Move>;
}

impl<T: TieBreak + ?Sized> TieBreak for &mut T {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        (**self).pick(candidates)
    }
}

/// Uniform choice driven by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTieBreak<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomTieBreak<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreak<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomTieBreak<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TieBreak for RandomTieBreak<R> {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Earliest candidate in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreak for FirstCandidate {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.first().copied()
    }
}

/// Latest candidate in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastCandidate;

impl TieBreak for LastCandidate {
    fn pick(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.last().copied()
    }
}
