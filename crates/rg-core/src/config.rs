//! Tuning constants for a run.
//!
//! Every struct here has a `Default` matching the values the engine was tuned
//! with, so a config file only needs to name what it overrides (with the
//! `serde` feature, missing fields fall back to the defaults).

use crate::{Bounds, RgError, RgResult};

// ── MotionConfig ──────────────────────────────────────────────────────────────

/// Per-agent animation timing and pose geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Animation steps for one rolling move between adjacent cells.
    pub move_steps: u32,
    /// Animation steps for the landing bounce after reaching the destination.
    pub landing_steps: u32,
    /// Peak height of the landing bounce, in world units.
    pub bounce_height: f32,
    /// Upper bound (inclusive) of the uniform pre-move delay, in ticks.
    pub max_move_delay: u32,
    /// Edge length of the rendered cube, in world units.
    pub cube_size: f32,
    /// World-space offset added to a cell's `(x, z)` to place it in the scene.
    pub world_offset: [f32; 2],
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_steps:     20,
            landing_steps:  12,
            bounce_height:  0.3,
            max_move_delay: 10,
            cube_size:      0.95,
            world_offset:   [-20.0, -7.0],
        }
    }
}

// ── ShuffleConfig ─────────────────────────────────────────────────────────────

/// Shuffle scheduler bound plus the driver-side throttle knobs.
///
/// Only `max_attempts` belongs to the scheduler itself; the rest is policy
/// applied by the tick loop that decides *when* to invoke it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShuffleConfig {
    /// Pair attempts per scheduler invocation.
    pub max_attempts: u32,
    /// Ticks between shuffle opportunities (30 ≈ 0.5 s at 60 fps).
    pub interval_ticks: u64,
    /// Maximum outstanding shuffle credits before invocations pause.
    pub max_credits: u32,
    /// Skip shuffling while the averaged frame time is at or above this.
    pub frame_time_threshold_ms: f32,
    /// Width of the frame-time averaging window.
    pub frame_window_ms: f32,
    /// Ticks between unsettled-agent census samples (300 ≈ 5 s).
    pub census_interval_ticks: u64,
    /// Ticks between stall checks (600 ≈ 10 s).
    pub stall_check_interval_ticks: u64,
    /// Refund a credit per opportunity while fewer than this many agents are
    /// still travelling.
    pub quiet_threshold: usize,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            max_attempts:               40,
            interval_ticks:             30,
            max_credits:                20,
            frame_time_threshold_ms:    100.0,
            frame_window_ms:            250.0,
            census_interval_ticks:      300,
            stall_check_interval_ticks: 600,
            quiet_threshold:            4,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Ticks to simulate when driven by `Sim::run`.
    pub total_ticks: u64,
    /// Nominal milliseconds per tick.
    pub tick_duration_ms: u32,
    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
    /// Playable rectangle.  Every start cell and destination must lie inside.
    pub bounds: Bounds,
    pub motion: MotionConfig,
    pub shuffle: ShuffleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            total_ticks:           3_600,
            tick_duration_ms:      16,
            output_interval_ticks: 60,
            bounds:                Bounds::default(),
            motion:                MotionConfig::default(),
            shuffle:               ShuffleConfig::default(),
        }
    }
}

impl SimConfig {
    /// Reject values that would stall or divide by zero at runtime.
    pub fn validate(&self) -> RgResult<()> {
        if !self.bounds.is_valid() {
            return Err(RgError::Config(format!("empty bounds {}", self.bounds)));
        }
        if self.motion.move_steps == 0 {
            return Err(RgError::Config("motion.move_steps must be at least 1".into()));
        }
        if self.motion.landing_steps == 0 {
            return Err(RgError::Config("motion.landing_steps must be at least 1".into()));
        }
        if self.tick_duration_ms == 0 {
            return Err(RgError::Config("tick_duration_ms must be at least 1".into()));
        }
        Ok(())
    }
}
