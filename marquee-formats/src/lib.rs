//! Persisted formats for the Marquee engine
//!
//! - JSON image and icon assets: a 2-D array of `[r, g, b]` rows
//! - weatherapi.com `current.json` payloads
//! - TOML engine configuration
//! - [`JsonAssetStore`], an [`AssetStore`](marquee_core::traits::AssetStore)
//!   over any byte source
//!
//! ```text
//! images/<name>.json   32 rows × 32 cols
//! icons/<day|night>/<code>.json   16 rows × 16 cols
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod fmt;

pub mod config;
pub mod image;
pub mod store;
pub mod weather;

pub use config::{load_config, parse_config, LoadError};
pub use image::{decode_grid, decode_icon, decode_image};
pub use store::{AssetSource, JsonAssetStore, MAX_ASSET_LEN};
pub use weather::decode_weather;

#[cfg(feature = "std")]
pub use store::FsSource;
