//! Watchdog liveness policy
//!
//! Every loop that can run longer than the watchdog budget feeds the
//! watchdog at a fixed stride. The stride is derived from the budget rather
//! than hard-coded: the feed window is `budget / safety_margin`, and a loop
//! whose iterations cost `c` ms feeds every `window / c` iterations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default watchdog timeout (RP2040 maximum is ~8.3 s)
pub const DEFAULT_BUDGET_MS: u32 = 8000;

/// Default divisor applied to the budget to get the feed window
pub const DEFAULT_SAFETY_MARGIN: u8 = 3;

/// Watchdog budget and safety margin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LivenessPolicy {
    /// Watchdog timeout in milliseconds
    pub budget_ms: u32,
    /// Divisor applied to the budget; 3 gives a feed at least every ~2.7 s
    pub safety_margin: u8,
}

impl Default for LivenessPolicy {
    fn default() -> Self {
        Self {
            budget_ms: DEFAULT_BUDGET_MS,
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }
}

impl LivenessPolicy {
    /// Longest time allowed between two feeds
    pub const fn feed_window_ms(&self) -> u32 {
        let margin = if self.safety_margin == 0 {
            1
        } else {
            self.safety_margin as u32
        };
        self.budget_ms / margin
    }

    /// Stride for a loop whose iterations each cost `iteration_cost_ms`
    ///
    /// Never less than one: an iteration slower than the window feeds every
    /// time round.
    pub const fn stride_for(&self, iteration_cost_ms: u32) -> Stride {
        let cost = if iteration_cost_ms == 0 {
            1
        } else {
            iteration_cost_ms
        };
        let every = self.feed_window_ms() / cost;
        Stride {
            every: if every == 0 { 1 } else { every },
        }
    }
}

/// Feed every `every` iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stride {
    every: u32,
}

impl Stride {
    /// Fixed stride; zero is treated as one
    pub const fn every(n: u32) -> Self {
        Self {
            every: if n == 0 { 1 } else { n },
        }
    }

    /// Iterations between feeds
    pub const fn get(&self) -> u32 {
        self.every
    }

    /// Start counting iterations against this stride
    pub const fn counter(self) -> StrideCounter {
        StrideCounter {
            stride: self,
            count: 0,
        }
    }
}

/// Iteration counter for a [`Stride`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideCounter {
    stride: Stride,
    count: u32,
}

impl StrideCounter {
    /// Record one completed iteration
    ///
    /// Returns true when a feed is due, i.e. after iterations
    /// `stride`, `2 * stride`, ...
    pub fn step(&mut self) -> bool {
        self.count = self.count.wrapping_add(1);
        self.count % self.stride.get() == 0
    }

    /// Iterations recorded so far
    pub fn count(&self) -> u32 {
        self.count
    }
}
