//! `rg-spatial` — occupancy snapshot and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`occupancy`] | `GridState` (`Cell → AgentId`, rebuilt every tick)        |
//! | [`router`]    | `Router` trait, `AStarRouter`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash`'s FxHashMap for the occupancy map.       |

pub mod occupancy;
pub mod router;


pub use occupancy::GridState;
pub use router::{AStarRouter, Router};
