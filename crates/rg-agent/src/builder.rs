//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use rg_agent::AgentStoreBuilder;
//! use rg_core::Cell;
//!
//! let targets = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)];
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .targets(targets)
//!     .build();
//!
//! assert_eq!(store.count, 3);
//! assert_eq!(rngs.len(),  3);
//! assert!(store.phase.iter().all(|p| p.is_settled()));
//! ```

use rg_core::Cell;

use crate::color::PALETTE;
use crate::{AgentRngs, AgentStore, ColorTag};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// One agent is created per target cell, in list order; agent `i` starts on
/// `targets[i]` with that same cell as its destination, fully settled.
pub struct AgentStoreBuilder {
    seed: u64,
    targets: Vec<Cell>,
    palette: Vec<ColorTag>,
}

impl AgentStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            targets: Vec::new(),
            palette: PALETTE.to_vec(),
        }
    }

    /// Set the start/target cell list (one agent per entry).
    pub fn targets(mut self, targets: Vec<Cell>) -> Self {
        self.targets = targets;
        self
    }

    /// Replace the default color palette.  Colors are assigned round-robin
    /// by agent index.
    pub fn palette(mut self, palette: Vec<ColorTag>) -> Self {
        self.palette = palette;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// No validation happens here; the simulation builder checks bounds and
    /// duplicate cells before accepting the store.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let count = self.targets.len();
        let colors = (0..count)
            .map(|i| ColorTag::cycled(&self.palette, i))
            .collect();

        let store = AgentStore::new(self.targets, colors);
        let rngs = AgentRngs::new(count, self.seed);

        (store, rngs)
    }
}
