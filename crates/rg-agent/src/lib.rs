//! `rg-agent` — agent arena and per-agent state machine for `rollgrid`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `Phase` (settled / ready / moving / landing), `MoveState` |
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`builder`]   | `AgentStoreBuilder` (one agent per target cell)           |
//! | [`pose`]      | `Pose`, rolling-edge and landing-bounce transforms        |
//! | [`color`]     | `ColorTag`, default `PALETTE`                             |
//! | [`view`]      | `AgentView`, the per-tick renderer record                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public value types.|

pub mod builder;
pub mod color;
pub mod pose;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use color::{ColorTag, PALETTE};
pub use pose::Pose;
pub use state::{MoveState, Phase, PhaseEvent};
pub use store::{AgentRngs, AgentStore};
pub use view::AgentView;
