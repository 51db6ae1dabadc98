//! Watchdog and monotonic clock traits

/// Hardware watchdog
///
/// If [`Watchdog::feed`] is not called within the configured timeout the
/// host is forcibly restarted.
pub trait Watchdog {
    /// Arm the watchdog with the given timeout
    fn initialize(&mut self, timeout_ms: u32);

    /// Refresh the deadline
    fn feed(&mut self);
}

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}
