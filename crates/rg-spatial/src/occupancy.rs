//! `GridState` — the authoritative occupancy snapshot for one tick.
//!
//! # Protocol
//!
//! ```text
//! tick start   rebuild(entries)     every agent's cell + every in-flight target
//! arbitration  reserve(cell, id)    agent i's claim is visible to agents i+1..
//! next tick    rebuild(entries)     stale claims and vacated cells disappear
//! ```
//!
//! There is deliberately no removal API: a cell an agent is leaving stays
//! occupied until the next rebuild.  Later agents in the same tick observe
//! earlier agents' reservations (sequential consistency, not snapshot
//! isolation); this iteration-order dependence is part of the contract.

use rg_core::{AgentId, Cell};

#[cfg(not(feature = "fx-hash"))]
type CellMap = std::collections::HashMap<Cell, AgentId>;
#[cfg(feature = "fx-hash")]
type CellMap = rustc_hash::FxHashMap<Cell, AgentId>;

/// Mapping `Cell → AgentId` valid for the current tick.
///
/// At most one agent per cell.  Owned by the simulation loop; agents never
/// hold a reference to it.
#[derive(Default, Debug, Clone)]
pub struct GridState {
    cells: CellMap,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the map and repopulate it from `entries`.
    ///
    /// Callers pass, for every agent, its current cell and, when the agent
    /// is mid-move, its reserved target cell.  Returns the number of entries
    /// that landed on a cell already claimed by a *different* agent.  A
    /// correct simulation always returns 0; the later entry wins.
    pub fn rebuild<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (AgentId, Cell)>,
    {
        self.cells.clear();
        let mut conflicts = 0;
        for (agent, cell) in entries {
            if let Some(prev) = self.cells.insert(cell, agent) {
                if prev != agent {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// `true` if any agent occupies or has reserved `cell` this tick.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// The agent holding `cell`, if any.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<AgentId> {
        self.cells.get(&cell).copied()
    }

    /// Claim `cell` for `agent` immediately, mid-tick.
    #[inline]
    pub fn reserve(&mut self, cell: Cell, agent: AgentId) {
        self.cells.insert(cell, agent);
    }

    /// Number of occupied or reserved cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterator over `(cell, agent)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        self.cells.iter().map(|(&c, &a)| (c, a))
    }
}
