use rg_core::{AgentId, Bounds, Cell, RgError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} at {cell} lies outside bounds {bounds}")]
    OutOfBounds {
        agent:  AgentId,
        cell:   Cell,
        bounds: Bounds,
    },

    #[error("{agent} and {other} both start on {cell}")]
    DuplicateStart {
        agent: AgentId,
        other: AgentId,
        cell:  Cell,
    },

    #[error(transparent)]
    Core(#[from] RgError),
}

pub type SimResult<T> = Result<T, SimError>;
