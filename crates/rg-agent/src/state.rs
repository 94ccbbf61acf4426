//! Per-agent movement phase.

use rg_core::{Cell, MotionConfig};

/// A single committed move from one cell to an adjacent one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveState {
    /// Cell the agent is rolling off.
    pub from: Cell,
    /// Adjacent cell the agent reserved and is rolling onto.
    pub to: Cell,
    /// Animation steps completed, `0..=move_steps`.
    pub step: u32,
    /// Ticks still to wait before the first animation step.
    pub delay: u32,
}

/// The movement phase of one agent.
///
/// ```text
///             assign destination ≠ cell
///   Settled ───────────────────────────► Ready ◄──────────────┐
///      ▲                                  │ arbiter commits   │ arrived,
///      │ bounce done                      ▼                   │ cell ≠ dest
///   Landing ◄─────────────────────────── Moving ──────────────┘
///             arrived, cell == dest
/// ```
///
/// Only `Ready` agents are considered by the arbiter; only `Settled` agents
/// are considered by the shuffle scheduler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At the destination with nothing pending.
    #[default]
    Settled,
    /// Destination unmet; waiting for the arbiter to commit the next step.
    Ready,
    /// Rolling to an adjacent cell.
    Moving(MoveState),
    /// Bouncing in place after arriving at the destination.
    Landing { step: u32 },
}

/// What happened during one call to [`Phase::advance`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// A move finished; the agent now stands on `cell`.
    Arrived { cell: Cell, at_destination: bool },
    /// The landing bounce finished.
    Landed,
    /// A `Ready` agent found itself already on its destination.
    Settled,
}

impl Phase {
    /// Label used in logs and snapshot rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Settled => "settled",
            Phase::Ready => "ready",
            Phase::Moving(_) => "moving",
            Phase::Landing { .. } => "landing",
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Settled)
    }

    /// `true` while a move or landing animation is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, Phase::Moving(_) | Phase::Landing { .. })
    }

    /// The cell reserved by an in-flight move.
    #[inline]
    pub fn reserved_target(&self) -> Option<Cell> {
        match self {
            Phase::Moving(m) => Some(m.to),
            _ => None,
        }
    }

    /// Fraction of the current animation completed, in `[0.0, 1.0]`.
    ///
    /// `0.0` while a move is still waiting out its start delay, `1.0` when no
    /// animation is running.
    pub fn progress(&self, motion: &MotionConfig) -> f32 {
        match *self {
            Phase::Moving(m) => m.step as f32 / motion.move_steps.max(1) as f32,
            Phase::Landing { step } => step as f32 / motion.landing_steps.max(1) as f32,
            Phase::Settled | Phase::Ready => 1.0,
        }
    }

    /// Advance the animation by one tick.
    ///
    /// `cell` is the agent's authoritative position and is updated when a
    /// move completes; the cell it left is released implicitly at the next
    /// occupancy rebuild.
    pub fn advance(
        &mut self,
        cell: &mut Cell,
        destination: Cell,
        motion: &MotionConfig,
    ) -> Option<PhaseEvent> {
        match self {
            Phase::Settled => None,

            Phase::Ready => {
                if *cell == destination {
                    *self = Phase::Settled;
                    Some(PhaseEvent::Settled)
                } else {
                    None
                }
            }

            Phase::Moving(m) => {
                if m.delay > 0 {
                    m.delay -= 1;
                    return None;
                }
                m.step += 1;
                if m.step < motion.move_steps {
                    return None;
                }
                *cell = m.to;
                let at_destination = *cell == destination;
                *self = if at_destination {
                    Phase::Landing { step: 0 }
                } else {
                    Phase::Ready
                };
                Some(PhaseEvent::Arrived { cell: *cell, at_destination })
            }

            Phase::Landing { step } => {
                *step += 1;
                if *step < motion.landing_steps {
                    return None;
                }
                // Settle only if the destination was not re-pointed mid-bounce.
                *self = if *cell == destination {
                    Phase::Settled
                } else {
                    Phase::Ready
                };
                Some(PhaseEvent::Landed)
            }
        }
    }
}
