//! Configuration types
//!
//! Board-agnostic configuration structures. Parsing from TOML lives in
//! `marquee-formats`.

pub mod liveness;
pub mod types;

pub use liveness::{LivenessPolicy, Stride, StrideCounter};
pub use types::*;
