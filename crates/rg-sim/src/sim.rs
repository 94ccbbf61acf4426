//! The `Sim` struct and its tick loop.

use tracing::{debug, trace, warn};

use rg_agent::{AgentRngs, AgentStore, AgentView, PhaseEvent};
use rg_core::{AgentId, Cell, RgError, SimClock, SimConfig, SimRng, Tick};
use rg_spatial::{GridState, Router};

use crate::{
    ArbiterReport, MovementArbiter, ShuffleOutcome, ShuffleScheduler, ShuffleThrottle, SimError,
    SimObserver, SimResult,
};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one [`Sim::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,
    pub arbiter: ArbiterReport,
    /// Moves that completed this tick.
    pub arrived: usize,
    /// Landing bounces that completed this tick.
    pub landed: usize,
    /// Ready agents that found themselves already on their destination.
    pub settled: usize,
    /// Occupancy collisions found by the rebuild.  Always 0 in a correct run.
    pub conflicts: usize,
    /// Set when the throttle let the shuffle scheduler run.
    pub shuffle: Option<ShuffleOutcome>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` owns all engine state and is the single writer of the occupancy
/// map.  An external clock calls [`tick`](Sim::tick) once per frame (or uses
/// [`run`](Sim::run) / [`run_ticks`](Sim::run_ticks)) and reads
/// [`views`](Sim::views) to draw.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Global configuration (bounds, timing, throttle knobs, …).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and maps to nominal time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Simulation-level RNG (shuffle pair selection).
    pub rng: SimRng,

    /// Occupancy snapshot, rebuilt at the start of every tick.
    pub grid: GridState,

    /// Path planner consulted by the arbiter and the shuffle scheduler.
    pub router: R,

    pub arbiter: MovementArbiter,
    pub scheduler: ShuffleScheduler,
    pub throttle: ShuffleThrottle,
}

impl<R: Router> Sim<R> {
    // ── Driving ───────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.config.total_ticks);
        while self.clock.current_tick < end {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let report = self.tick();
        if let Some(outcome) = &report.shuffle {
            observer.on_shuffle(now, outcome);
        }
        observer.on_tick_end(&report);

        if now.every(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.views());
        }
    }

    /// Advance the engine by one tick.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let agents = &self.agents;
        self.throttle.observe(now, || agents.unsettled_count());

        let conflicts = self.rebuild_grid();
        let arbiter = self.arbiter.step(
            &mut self.agents,
            &mut self.rngs,
            &mut self.grid,
            &self.config.bounds,
            &self.router,
        );

        let mut report = TickReport { tick: now, arbiter, conflicts, ..TickReport::default() };

        for i in 0..self.agents.count {
            match self.agents.advance(AgentId(i as u32), &self.config.motion) {
                Some(PhaseEvent::Arrived { .. }) => report.arrived += 1,
                Some(PhaseEvent::Landed) => report.landed += 1,
                Some(PhaseEvent::Settled) => report.settled += 1,
                None => {}
            }
        }

        if self.throttle.poll(now) {
            report.shuffle = Some(self.shuffle_now());
        }

        trace!(
            tick = %now,
            proposed = report.arbiter.proposed,
            committed = report.arbiter.committed,
            fallback = report.arbiter.fallback,
            blocked = report.arbiter.blocked,
            arrived = report.arrived,
            "tick"
        );

        self.clock.advance();
        report
    }

    // ── External control ──────────────────────────────────────────────────

    /// Rebuild occupancy from current positions and run one shuffle
    /// scheduler invocation.
    pub fn shuffle_now(&mut self) -> ShuffleOutcome {
        self.rebuild_grid();
        let outcome = self.scheduler.attempt(
            &mut self.agents,
            &self.grid,
            &self.config.bounds,
            &self.router,
            &mut self.rng,
        );
        debug!(tick = %self.clock.current_tick, %outcome, "shuffle");
        outcome
    }

    /// Retarget one agent.  A settled agent starts routing immediately; a
    /// moving one picks the new destination up after its current step.
    pub fn set_destination(&mut self, agent: AgentId, cell: Cell) -> SimResult<()> {
        if !self.agents.contains(agent) {
            return Err(RgError::AgentNotFound(agent).into());
        }
        let bounds = self.config.bounds;
        if !bounds.contains(cell) {
            return Err(SimError::OutOfBounds { agent, cell, bounds });
        }
        self.agents.assign_destination(agent, cell);
        Ok(())
    }

    /// Forward one measured frame duration to the shuffle throttle.
    pub fn record_frame_time(&mut self, ms: f32) {
        self.throttle.record_frame_time(ms);
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// One render record per agent, in `AgentId` order.
    pub fn views(&self) -> Vec<AgentView> {
        self.agents
            .agent_ids()
            .map(|agent| self.agents.view(agent, &self.config.motion))
            .collect()
    }

    /// `true` if no two agents claim the same cell (current or reserved)
    /// and every claimed cell is inside the bounds.
    pub fn occupancy_is_consistent(&self) -> bool {
        let mut scratch = GridState::new();
        let conflicts = scratch.rebuild(self.agents.occupancy_entries());
        conflicts == 0 && scratch.iter().all(|(cell, _)| self.config.bounds.contains(cell))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn rebuild_grid(&mut self) -> usize {
        let conflicts = self.grid.rebuild(self.agents.occupancy_entries());
        if conflicts > 0 {
            warn!(tick = %self.clock.current_tick, conflicts, "occupancy rebuild found overlapping agents");
        }
        conflicts
    }
}
