//! Last-known-good value with a refresh throttle

use super::error::FetchError;
use crate::fmt::{info, warn};

/// What a call to [`Cached::refresh`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshOutcome {
    /// Fetch succeeded and replaced the cached value
    Updated,
    /// Fetch failed; the previous value is kept
    Failed(FetchError),
    /// Too soon since the last attempt; nothing was fetched
    Throttled,
}

/// Cached value refreshed at most once per interval
///
/// The interval runs from the last attempt, successful or not, so a failing
/// source is not hammered.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    value: Option<T>,
    last_attempt_ms: Option<u64>,
    interval_ms: u32,
}

impl<T> Cached<T> {
    /// Create an empty cache; the first refresh is always due
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            value: None,
            last_attempt_ms: None,
            interval_ms,
        }
    }

    /// Check if a refresh would run at `now_ms`
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_attempt_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms as u64,
        }
    }

    /// Run `fetch` if the interval has elapsed
    ///
    /// `now_ms` is recorded as the attempt time whatever the result.
    pub fn refresh<F>(&mut self, now_ms: u64, fetch: F) -> RefreshOutcome
    where
        F: FnOnce() -> Result<T, FetchError>,
    {
        if !self.is_due(now_ms) {
            return RefreshOutcome::Throttled;
        }
        self.last_attempt_ms = Some(now_ms);

        match fetch() {
            Ok(value) => {
                info!("refresh succeeded");
                self.value = Some(value);
                RefreshOutcome::Updated
            }
            Err(e) => {
                warn!("refresh failed, will retry later: {}", e);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Last successfully fetched value
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Time of the last attempt
    pub fn last_attempt_ms(&self) -> Option<u64> {
        self.last_attempt_ms
    }
}
