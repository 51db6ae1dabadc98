//! Watchdog coordinator
//!
//! Owns the watchdog and the time source. All sleeps go through here so no
//! single wait can outlast the feed window.

use embedded_hal::delay::DelayNs;

use crate::config::{LivenessPolicy, Stride, StrideCounter};
use crate::fmt::{trace, warn};
use crate::traits::{Clock, Watchdog};

/// Feeds the watchdog and paces sleeps against the liveness policy
pub struct WatchdogCoordinator<W, T> {
    watchdog: W,
    time: T,
    policy: LivenessPolicy,
    feeds: u32,
    last_feed_ms: u64,
}

impl<W, T> WatchdogCoordinator<W, T>
where
    W: Watchdog,
    T: DelayNs + Clock,
{
    /// Arm the watchdog with the policy budget
    pub fn new(mut watchdog: W, time: T, policy: LivenessPolicy) -> Self {
        watchdog.initialize(policy.budget_ms);
        let last_feed_ms = time.now_ms();
        Self {
            watchdog,
            time,
            policy,
            feeds: 0,
            last_feed_ms,
        }
    }

    /// Signal liveness
    ///
    /// Logs a warning if the previous feed is older than the budget; on real
    /// hardware the host would already have been reset.
    pub fn feed(&mut self) {
        let now = self.time.now_ms();
        let gap = now.saturating_sub(self.last_feed_ms);
        if gap > self.policy.budget_ms as u64 {
            warn!("watchdog starved for {} ms", gap);
        }
        self.watchdog.feed();
        self.feeds = self.feeds.wrapping_add(1);
        self.last_feed_ms = now;
        trace!("watchdog fed ({})", self.feeds);
    }

    /// Sleep for `ms`, split into chunks no longer than the feed window
    ///
    /// Feeds between chunks, never after the last one, so short sleeps
    /// never feed.
    pub fn sleep_ms(&mut self, ms: u32) {
        let window = self.policy.feed_window_ms().max(1);
        let mut remaining = ms;
        while remaining > 0 {
            let chunk = remaining.min(window);
            self.time.delay_ms(chunk);
            remaining -= chunk;
            if remaining > 0 {
                self.feed();
            }
        }
    }

    /// Count one loop iteration and feed when the stride comes due
    pub fn pace(&mut self, counter: &mut StrideCounter) {
        if counter.step() {
            self.feed();
        }
    }

    /// Stride for a loop whose iterations cost `iteration_cost_ms`
    pub fn stride_for(&self, iteration_cost_ms: u32) -> Stride {
        self.policy.stride_for(iteration_cost_ms)
    }

    /// Current time
    pub fn now_ms(&self) -> u64 {
        self.time.now_ms()
    }

    /// Milliseconds since the last feed
    pub fn since_last_feed_ms(&self) -> u64 {
        self.time.now_ms().saturating_sub(self.last_feed_ms)
    }

    /// Number of feeds so far
    pub fn feeds(&self) -> u32 {
        self.feeds
    }

    /// Active liveness policy
    pub fn policy(&self) -> &LivenessPolicy {
        &self.policy
    }

    /// Access the watchdog driver
    pub fn watchdog(&self) -> &W {
        &self.watchdog
    }
}
