//! `rg-core` — foundational types for the `rollgrid` cube-movement engine.
//!
//! This crate is a dependency of every other `rg-*` crate.  It has no `rg-*`
//! dependencies and only two external ones (`rand`, `thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`                                               |
//! | [`cell`]      | `Cell`, `Bounds`, `Direction`, Manhattan distance       |
//! | [`time`]      | `Tick`, `SimClock`                                      |
//! | [`config`]    | `SimConfig`, `MotionConfig`, `ShuffleConfig`            |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)               |
//! | [`error`]     | `RgError`, `RgResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |
//!
//! Applications enable `serde` to load a `SimConfig` from a TOML file.

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Bounds, Cell, Direction};
pub use config::{MotionConfig, ShuffleConfig, SimConfig};
pub use error::{RgError, RgResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
