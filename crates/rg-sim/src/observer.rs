//! Simulation observer trait for progress reporting and rendering.

use rg_agent::AgentView;
use rg_core::Tick;

use crate::{ShuffleOutcome, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         self.0 += report.landed;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's counters.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with one view per agent, in `AgentId` order.
    fn on_snapshot(&mut self, _tick: Tick, _views: &[AgentView]) {}

    /// Called whenever the throttle let the shuffle scheduler run.
    fn on_shuffle(&mut self, _tick: Tick, _outcome: &ShuffleOutcome) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
