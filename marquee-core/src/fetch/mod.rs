//! Network fetches that never block past the watchdog budget
//!
//! [`ResilientFetch`] turns every failure into "no data" and
//! [`Cached`] keeps the last good value between attempts.

pub mod cache;
pub mod error;
pub mod resilient;

pub use cache::{Cached, RefreshOutcome};
pub use error::FetchError;
pub use resilient::{ConnectionInfo, ResilientFetch};
