//! Board-agnostic rendering and liveness engine for a 32×32 LED matrix
//!
//! This crate contains everything that does not depend on a specific board:
//!
//! - Pixel surface and pen model
//! - Transitions (directional wipes, fades, immediate)
//! - Scrolling text compositor (bordered and icon-annotated)
//! - Frame loop and watchdog coordinator
//! - Resilient network fetch with reconnect, timeout and throttle
//! - Weather report model and the show runner that strings it all together
//! - Collaborator traits for the display, buttons, watchdog, network and assets
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  show (playlist of steps)               │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ transition/text │   │ fetch + weather │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────────────────────────────┐
//! │  frame (FrameLoop, WatchdogCoordinator) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  traits (Display, Input, Watchdog, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Everything runs on one logical thread. Long loops feed the watchdog at a
//! stride derived from [`config::LivenessPolicy`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod config;
pub mod fetch;
pub mod frame;
pub mod show;
pub mod surface;
pub mod text;
pub mod traits;
pub mod transition;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{EngineConfig, LivenessPolicy};
pub use fetch::{Cached, FetchError, RefreshOutcome, ResilientFetch};
pub use frame::{Brightness, FrameLoop, RenderContext, WatchdogCoordinator};
pub use show::{Show, Step, TransitionChoice};
pub use surface::{Color, Icon, Image, PixelGrid, PixelSurface, HEIGHT, WIDTH};
pub use transition::{DrawOutcome, InvalidTransition, Transition};
