//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every random choice the engine makes is drawn from an explicitly seeded
//! `SmallRng` that is passed into the call making the choice; nothing reads
//! a thread-local or OS RNG.
//!
//! - Move-local choices (neighbour order, fallback pick, pre-move delay) use
//!   the moving agent's own [`AgentRng`], seeded as
//!   `global_seed XOR (agent_id * MIXING_CONSTANT)`.
//! - Shuffle pair selection uses the single [`SimRng`].
//!
//! Because agents are processed in ascending `AgentId` order each tick, two
//! runs with the same seed and the same target list produce identical
//! per-tick agent state.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in a parallel `Vec<AgentRng>` next to the agent arena so the
/// arbiter can borrow one agent's RNG mutably while reading the others' state.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// Pre-move start delay, uniform over `0..=max` ticks.
    #[inline]
    pub fn move_delay(&mut self, max: u32) -> u32 {
        self.0.gen_range(0..=max)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (shuffle pair selection).
///
/// Used only from the single-threaded tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Two distinct indices drawn uniformly from `0..len`.
    ///
    /// Returns `None` when `len < 2`.
    pub fn distinct_pair(&mut self, len: usize) -> Option<(usize, usize)> {
        if len < 2 {
            return None;
        }
        let first = self.0.gen_range(0..len);
        let mut second = self.0.gen_range(0..len - 1);
        if second >= first {
            second += 1;
        }
        Some((first, second))
    }
}
