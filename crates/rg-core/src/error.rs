//! Engine error type.
//!
//! Runtime conditions (no path, no legal move, search budget exhausted) are
//! never errors; they surface as `Option::None` and the agent retries next
//! tick.  `RgError` covers caller and configuration mistakes only.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `rg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RgError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rg-*` crates.
pub type RgResult<T> = Result<T, RgError>;
