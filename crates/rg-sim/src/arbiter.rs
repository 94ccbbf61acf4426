//! Per-tick move proposal and commit.
//!
//! # Reservation protocol
//!
//! Agents are considered in ascending `AgentId` order against a single
//! occupancy snapshot.  Each commit reserves its target cell in the snapshot
//! immediately, so agent `i` sees the reservations of agents `0..i` from the
//! same tick and earlier agents win contested cells.  The outcome therefore
//! depends on iteration order; that dependency is part of the contract.

use rg_agent::{AgentRngs, AgentStore};
use rg_core::{AgentId, Bounds, Cell};
use rg_spatial::{GridState, Router};

/// Counters from one [`MovementArbiter::step`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArbiterReport {
    /// Agents that wanted to move (ready, destination unmet).
    pub proposed: usize,
    /// Agents that reserved a cell and started moving.
    pub committed: usize,
    /// Commits that followed the router's suggested step.
    pub routed: usize,
    /// Commits that took a random free neighbour instead.
    pub fallback: usize,
    /// Agents with no free neighbour this tick.
    pub blocked: usize,
}

/// Greedy-with-fallback move selection.
#[derive(Clone, Debug)]
pub struct MovementArbiter {
    /// Upper bound (inclusive) of the randomized pre-move delay, in ticks.
    pub max_move_delay: u32,
}

impl MovementArbiter {
    pub fn new(max_move_delay: u32) -> Self {
        Self { max_move_delay }
    }

    /// Propose and commit at most one move per eligible agent.
    ///
    /// `grid` must have been rebuilt from `agents` at the start of the tick.
    /// Being unable to move is not an error; the agent stays `Ready` and is
    /// reconsidered next tick.
    pub fn step<R: Router + ?Sized>(
        &self,
        agents: &mut AgentStore,
        rngs:   &mut AgentRngs,
        grid:   &mut GridState,
        bounds: &Bounds,
        router: &R,
    ) -> ArbiterReport {
        let mut report = ArbiterReport::default();

        for i in 0..agents.count {
            let agent = AgentId(i as u32);
            if !agents.wants_move(agent) {
                continue;
            }
            report.proposed += 1;

            let from = agents.cell[i];
            let goal = agents.destination[i];
            let rng = rngs.get_mut(agent);

            let mut neighbors = from.neighbors();
            rng.shuffle(&mut neighbors);
            let candidates: Vec<Cell> = neighbors
                .into_iter()
                .filter(|&c| bounds.contains(c) && !grid.is_occupied(c))
                .collect();

            let suggested = router.next_step(from, goal, grid, bounds);
            let target = match suggested {
                Some(step) if candidates.contains(&step) => {
                    report.routed += 1;
                    step
                }
                _ => match rng.choose(&candidates) {
                    Some(&c) => {
                        report.fallback += 1;
                        c
                    }
                    None => {
                        report.blocked += 1;
                        continue;
                    }
                },
            };

            debug_assert!(!grid.is_occupied(target), "{agent} committing to claimed {target}");

            let delay = rng.move_delay(self.max_move_delay);
            if agents.begin_move(agent, target, delay) {
                grid.reserve(target, agent);
                report.committed += 1;
            }
        }

        report
    }
}
