//! Per-tick agent record handed to the rendering collaborator.

use rg_core::{AgentId, Cell};

use crate::{ColorTag, Phase, Pose};

/// Everything a renderer needs to draw one agent this tick.
///
/// `pose` is the ready-made transform; `cell`, `phase` and `progress` are the
/// minimal tuple for renderers that prefer to derive their own.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:          AgentId,
    pub cell:        Cell,
    pub destination: Cell,
    pub phase:       Phase,
    /// Fraction of the current animation completed, `[0.0, 1.0]`.
    pub progress:    f32,
    pub color:       ColorTag,
    pub pose:        Pose,
}
