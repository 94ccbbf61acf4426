//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The arbiter needs `&mut AgentRngs` (one agent's RNG for neighbour order,
//! fallback pick and start delay) while it also mutates that agent's phase
//! in `&mut AgentStore`.  Keeping RNGs in a separate struct keeps the two
//! borrows disjoint without cloning or `RefCell`.

use rg_core::{AgentId, AgentRng, Cell, MotionConfig};

use crate::{AgentView, ColorTag, MoveState, Phase, PhaseEvent, Pose};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so both
/// can be borrowed mutably at once.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays arena for all agent state.
///
/// Every `Vec` has exactly `count` elements and `AgentId` is the index into
/// all of them.  Agents are created once at startup and never removed, so
/// ids stay stable for the whole run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Authoritative cell.  Changes only when a move completes.
    pub cell: Vec<Cell>,

    /// Where the agent is being routed.  Equals `cell` for settled agents.
    pub destination: Vec<Cell>,

    /// Movement / landing state machine.
    pub phase: Vec<Phase>,

    /// Visual tag, opaque to the engine.
    pub color: Vec<ColorTag>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Every cell claimed by an agent: its current cell, plus the reserved
    /// target for agents mid-move.  Feed this to `GridState::rebuild`.
    pub fn occupancy_entries(&self) -> impl Iterator<Item = (AgentId, Cell)> + '_ {
        self.agent_ids().flat_map(move |agent| {
            let i = agent.index();
            std::iter::once((agent, self.cell[i]))
                .chain(self.phase[i].reserved_target().map(|to| (agent, to)))
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if the arbiter should try to move `agent` this tick: not
    /// animating, not settled, and not already at its destination.
    #[inline]
    pub fn wants_move(&self, agent: AgentId) -> bool {
        let i = agent.index();
        matches!(self.phase[i], Phase::Ready) && self.cell[i] != self.destination[i]
    }

    #[inline]
    pub fn is_settled(&self, agent: AgentId) -> bool {
        self.phase[agent.index()].is_settled()
    }

    /// Agents eligible for a shuffle swap, in ascending id order.
    pub fn settled_agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |&a| self.is_settled(a))
    }

    /// Number of agents not yet settled on their destination.
    pub fn unsettled_count(&self) -> usize {
        self.phase.iter().filter(|p| !p.is_settled()).count()
    }

    /// Number of agents with a move animation in flight.
    pub fn moving_count(&self) -> usize {
        self.phase.iter().filter(|p| matches!(p, Phase::Moving(_))).count()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Ready → Moving toward the adjacent cell `to`, after `delay` ticks.
    ///
    /// Returns `false` (and changes nothing) if the agent is not `Ready` or
    /// `to` is not 4-adjacent to its cell.
    pub fn begin_move(&mut self, agent: AgentId, to: Cell, delay: u32) -> bool {
        let i = agent.index();
        let from = self.cell[i];
        if !matches!(self.phase[i], Phase::Ready) || from.manhattan(to) != 1 {
            return false;
        }
        self.phase[i] = Phase::Moving(MoveState { from, to, step: 0, delay });
        true
    }

    /// Advance `agent`'s animation by one tick.
    pub fn advance(&mut self, agent: AgentId, motion: &MotionConfig) -> Option<PhaseEvent> {
        let i = agent.index();
        let destination = self.destination[i];
        self.phase[i].advance(&mut self.cell[i], destination, motion)
    }

    /// Point `agent` at a new destination.
    ///
    /// A settled agent given a different cell becomes `Ready`; agents already
    /// under way keep their phase and pick the new target up on their next
    /// decision.
    pub fn assign_destination(&mut self, agent: AgentId, destination: Cell) {
        let i = agent.index();
        self.destination[i] = destination;
        if self.phase[i].is_settled() && self.cell[i] != destination {
            self.phase[i] = Phase::Ready;
        }
    }

    /// Exchange two agents' destinations without touching their phases.
    ///
    /// The shuffle scheduler uses this for speculative swaps; calling it
    /// twice restores the original destinations exactly.
    pub fn swap_destinations(&mut self, a: AgentId, b: AgentId) {
        self.destination.swap(a.index(), b.index());
    }

    /// Settled → Ready, so the arbiter starts routing the agent.
    pub fn mark_ready(&mut self, agent: AgentId) {
        let i = agent.index();
        if self.phase[i].is_settled() {
            self.phase[i] = Phase::Ready;
        }
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// Render-ready record for one agent.
    pub fn view(&self, agent: AgentId, motion: &MotionConfig) -> AgentView {
        let i = agent.index();
        let phase = self.phase[i];
        AgentView {
            id:          agent,
            cell:        self.cell[i],
            destination: self.destination[i],
            phase,
            progress:    phase.progress(motion),
            color:       self.color[i],
            pose:        Pose::for_phase(self.cell[i], &phase, motion),
        }
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(cells: Vec<Cell>, color: Vec<ColorTag>) -> Self {
        let count = cells.len();
        Self {
            count,
            destination: cells.clone(),
            cell: cells,
            phase: vec![Phase::Settled; count],
            color,
        }
    }
}
