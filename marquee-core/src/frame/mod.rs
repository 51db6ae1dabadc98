//! Frame pacing and liveness
//!
//! [`FrameLoop`] owns the [`RenderContext`] and the display, input and
//! watchdog collaborators. Drawing code mutates the surface and then calls
//! [`FrameLoop::tick`] once per frame.

pub mod brightness;
pub mod frame_loop;
pub mod state;
pub mod watchdog;

pub use brightness::Brightness;
pub use frame_loop::{FrameLoop, RenderContext};
pub use state::{FrameEvent, FrameState};
pub use watchdog::WatchdogCoordinator;
