//! `rg-sim` — tick loop orchestrator for the `rollgrid` engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Census    throttle samples the unsettled count when due.
//!   ② Rebuild   GridState repopulated from every agent's cell plus the
//!               reserved target of agents mid-move.
//!   ③ Arbitrate ascending AgentId: route, pick a free neighbour, reserve,
//!               Ready → Moving.
//!   ④ Animate   advance every agent's move / landing counters.
//!   ⑤ Shuffle   if the throttle allows, a fresh rebuild and then one
//!               ShuffleScheduler invocation.
//! ```
//!
//! Everything runs on one thread; the occupancy map is the only shared
//! mutable resource and the `Sim` is its single owner.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | FxHash occupancy map (forwarded to `rg-spatial`).   |
//! | `serde`   | Serde derives on config and view types.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_core::{Cell, SimConfig};
//! use rg_sim::{NoopObserver, SimBuilder};
//! use rg_spatial::AStarRouter;
//!
//! let targets = vec![Cell::new(0, 0), Cell::new(3, 2)];
//! let mut sim = SimBuilder::from_targets(SimConfig::default(), targets, AStarRouter::default())
//!     .build()?;
//! sim.shuffle_now();
//! sim.run(&mut NoopObserver);
//! ```

pub mod arbiter;
pub mod builder;
pub mod error;
pub mod observer;
pub mod shuffle;
pub mod sim;
pub mod throttle;


pub use arbiter::{ArbiterReport, MovementArbiter};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use shuffle::{ShuffleOutcome, ShuffleScheduler};
pub use sim::{Sim, TickReport};
pub use throttle::ShuffleThrottle;
