//! Collaborator traits
//!
//! These traits define the interface between the engine and the
//! board-specific drivers (panel, buttons, watchdog, WiFi, storage, fonts).

pub mod assets;
pub mod display;
pub mod font;
pub mod input;
pub mod network;
pub mod watchdog;

pub use assets::{AssetError, AssetStore};
pub use display::{Display, DisplayError};
pub use font::{Font, Glyph};
pub use input::{Button, Input};
pub use network::{HttpClient, HttpResponse, Ifconfig, NetError, Network};
pub use watchdog::{Clock, Watchdog};
