//! Transitions: directional wipes, fades and immediate draws

pub mod engine;
pub mod interpolate;
pub mod kind;
pub mod rng;

pub use engine::{clear, draw_image, reveal, wipe_order, DrawOutcome};
pub use interpolate::{interpolate, Interpolate};
pub use kind::{InvalidTransition, Transition};
pub use rng::Rng;
