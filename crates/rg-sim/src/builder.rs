//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;

use tracing::info;

use rg_agent::{AgentRngs, AgentStore, AgentStoreBuilder};
use rg_core::{AgentId, Cell, SimClock, SimConfig, SimRng};
use rg_spatial::{GridState, Router};

use crate::{MovementArbiter, ShuffleScheduler, ShuffleThrottle, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: bounds, seed, motion and shuffle tuning
/// - [`AgentStore`] + [`AgentRngs`]: from [`rg_agent::AgentStoreBuilder`],
///   or let [`SimBuilder::from_targets`] build them
/// - `R: Router`: the path planner (e.g. [`rg_spatial::AStarRouter`])
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(config.seed).targets(targets).build();
/// let mut sim = SimBuilder::new(config, store, rngs, AStarRouter::default()).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config: SimConfig,
    agents: AgentStore,
    rngs:   AgentRngs,
    router: R,
}

impl<R: Router> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs, router: R) -> Self {
        Self { config, agents, rngs, router }
    }

    /// One settled agent per target cell, seeded from `config.seed`.
    pub fn from_targets(config: SimConfig, targets: Vec<Cell>, router: R) -> Self {
        let (agents, rngs) = AgentStoreBuilder::new(config.seed).targets(targets).build();
        Self::new(config, agents, rngs, router)
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Rejects an invalid config, a RNG count that differs from the agent
    /// count, any agent cell or destination outside the bounds, and two
    /// agents starting on the same cell.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let agent_count = self.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        // ── Placement checks ──────────────────────────────────────────────
        let bounds = self.config.bounds;
        let mut starts: HashMap<Cell, AgentId> = HashMap::with_capacity(agent_count);
        for agent in self.agents.agent_ids() {
            let i = agent.index();
            for cell in [self.agents.cell[i], self.agents.destination[i]] {
                if !bounds.contains(cell) {
                    return Err(SimError::OutOfBounds { agent, cell, bounds });
                }
            }
            let cell = self.agents.cell[i];
            if let Some(&other) = starts.get(&cell) {
                return Err(SimError::DuplicateStart { agent, other, cell });
            }
            starts.insert(cell, agent);
        }

        info!(
            agents = agent_count,
            bounds = %bounds,
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock:     SimClock::new(self.config.tick_duration_ms),
            rng:       SimRng::new(self.config.seed),
            grid:      GridState::new(),
            arbiter:   MovementArbiter::new(self.config.motion.max_move_delay),
            scheduler: ShuffleScheduler::new(self.config.shuffle.max_attempts),
            throttle:  ShuffleThrottle::new(&self.config.shuffle),
            config:    self.config,
            agents:    self.agents,
            rngs:      self.rngs,
            router:    self.router,
        })
    }
}
