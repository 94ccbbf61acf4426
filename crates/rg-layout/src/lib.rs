//! `rg-layout` — target-cell lists for `rollgrid`.
//!
//! A layout is the ordered list of cells the agents start on.  Agent `i` is
//! created on `layout[i]`, so the list doubles as the initial destination
//! set that the shuffle scheduler later permutes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`loader`]  | `load_targets_csv`, `load_targets_reader`    |
//! | [`error`]   | `LayoutError`, `LayoutResult<T>`             |

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, LayoutResult};
pub use loader::{load_targets_csv, load_targets_reader, validate_targets};
