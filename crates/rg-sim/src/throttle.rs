//! Driver-side policy deciding when the shuffle scheduler runs.
//!
//! The throttle works on a budget of credits.  Each shuffle opportunity
//! (every `interval_ticks`) spends one credit if any remain and the recent
//! frame time is acceptable.  Credits come back in two ways: once per
//! opportunity while the scene is nearly quiet (fewer than `quiet_threshold`
//! agents still travelling), and once per stall check when the unsettled
//! count has not moved since the previous check.
//!
//! The unsettled count is sampled by a periodic census rather than every
//! tick, so refunds react to the state as of the last census.

use tracing::debug;

use rg_core::{ShuffleConfig, Tick};

#[derive(Clone, Debug)]
pub struct ShuffleThrottle {
    config: ShuffleConfig,

    credits_used: u32,
    /// Unsettled agents at the last census.
    census: usize,
    /// Census value seen by the previous stall check.
    last_checked: usize,

    /// Mean frame time over the last completed window.
    frame_time_ms: f32,
    window_total_ms: f32,
    window_frames: u32,
}

impl ShuffleThrottle {
    pub fn new(config: &ShuffleConfig) -> Self {
        Self {
            config:          config.clone(),
            credits_used:    0,
            census:          0,
            last_checked:    0,
            frame_time_ms:   0.0,
            window_total_ms: 0.0,
            window_frames:   0,
        }
    }

    pub fn credits_used(&self) -> u32 {
        self.credits_used
    }

    pub fn census(&self) -> usize {
        self.census
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    /// Feed one measured frame duration.  The running mean is published
    /// once the window has accumulated `frame_window_ms`.
    pub fn record_frame_time(&mut self, ms: f32) {
        self.window_frames += 1;
        self.window_total_ms += ms;
        if self.window_total_ms >= self.config.frame_window_ms {
            self.frame_time_ms = self.window_total_ms / self.window_frames as f32;
            self.window_frames = 0;
            self.window_total_ms = 0.0;
        }
    }

    /// Run the census and stall check due at `now`.
    ///
    /// `unsettled` is only evaluated on census ticks.
    pub fn observe(&mut self, now: Tick, unsettled: impl FnOnce() -> usize) {
        if now.every(self.config.census_interval_ticks) {
            self.census = unsettled();
        }

        if now.every(self.config.stall_check_interval_ticks) {
            if self.census == self.last_checked {
                self.refund();
                debug!(tick = %now, census = self.census, credits = self.credits_used, "stall check refunded a credit");
            }
            self.last_checked = self.census;
        }
    }

    /// Whether a shuffle should run at `now`.  Spends a credit when it
    /// returns `true`.
    pub fn poll(&mut self, now: Tick) -> bool {
        if !now.every(self.config.interval_ticks) {
            return false;
        }

        let fire = self.credits_used < self.config.max_credits
            && self.frame_time_ms < self.config.frame_time_threshold_ms;
        if fire {
            self.credits_used += 1;
        } else {
            debug!(
                tick = %now,
                credits = self.credits_used,
                frame_time_ms = self.frame_time_ms,
                "shuffle skipped"
            );
        }

        if self.census < self.config.quiet_threshold {
            self.refund();
        }
        fire
    }

    fn refund(&mut self) {
        self.credits_used = self.credits_used.saturating_sub(1);
    }
}
