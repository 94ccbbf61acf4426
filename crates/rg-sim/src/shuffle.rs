//! Bounded-attempt destination swap between two settled agents.
//!
//! A swap is speculative until both agents have a route to their new
//! destination on the current snapshot.  A failed attempt restores both
//! destinations exactly before the next pair is drawn, so no partial swap is
//! ever observable.

use std::fmt;

use tracing::debug;

use rg_agent::AgentStore;
use rg_core::{AgentId, Bounds, SimRng};
use rg_spatial::{GridState, Router};

/// Result of one [`ShuffleScheduler::attempt`] invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShuffleOutcome {
    /// The two agents exchanged destinations and are now routing.
    Swapped(AgentId, AgentId),
    /// Every attempt was rolled back.
    Exhausted { attempts: u32 },
    /// Fewer than two agents were settled, so no pair could be drawn.
    NotEnoughCandidates,
}

impl ShuffleOutcome {
    pub fn is_swapped(&self) -> bool {
        matches!(self, ShuffleOutcome::Swapped(..))
    }
}

impl fmt::Display for ShuffleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleOutcome::Swapped(a, b) => write!(f, "swapped {a} <-> {b}"),
            ShuffleOutcome::Exhausted { attempts } => {
                write!(f, "no feasible pair in {attempts} attempts")
            }
            ShuffleOutcome::NotEnoughCandidates => write!(f, "fewer than two settled agents"),
        }
    }
}

/// Periodic destination shuffler.  Carries no timing of its own; the tick
/// loop decides when to call it.
#[derive(Clone, Debug)]
pub struct ShuffleScheduler {
    pub max_attempts: u32,
}

impl ShuffleScheduler {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Try up to `max_attempts` random pairs of settled agents and commit the
    /// first pair whose swapped destinations are both reachable.
    ///
    /// A rolled-back pair may be drawn again by a later attempt.  `grid`
    /// must reflect current positions.
    pub fn attempt<R: Router + ?Sized>(
        &self,
        agents: &mut AgentStore,
        grid:   &GridState,
        bounds: &Bounds,
        router: &R,
        rng:    &mut SimRng,
    ) -> ShuffleOutcome {
        // Rollback restores every destination, so the settled set is fixed
        // for the whole invocation.
        let candidates: Vec<AgentId> = agents.settled_agents().collect();
        if candidates.len() < 2 {
            return ShuffleOutcome::NotEnoughCandidates;
        }

        for attempt in 0..self.max_attempts {
            let Some((i, j)) = rng.distinct_pair(candidates.len()) else {
                return ShuffleOutcome::NotEnoughCandidates;
            };
            let (a, b) = (candidates[i], candidates[j]);

            agents.swap_destinations(a, b);
            let reachable = |agent: AgentId| {
                let k = agent.index();
                router
                    .path(agents.cell[k], agents.destination[k], grid, bounds)
                    .is_some()
            };

            if reachable(a) && reachable(b) {
                agents.mark_ready(a);
                agents.mark_ready(b);
                debug!(%a, %b, attempt, "shuffle committed");
                return ShuffleOutcome::Swapped(a, b);
            }

            agents.swap_destinations(a, b);
            debug!(%a, %b, attempt, "shuffle rolled back");
        }

        ShuffleOutcome::Exhausted { attempts: self.max_attempts }
    }
}
