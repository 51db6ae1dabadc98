//! Pixel surface, colors and decoded pixel grids

pub mod canvas;
pub mod color;
pub mod grid;

pub use canvas::PixelSurface;
pub use color::Color;
pub use grid::{Icon, Image, PixelGrid, ICON_SIZE};

/// Display width in pixels
pub const WIDTH: usize = 32;

/// Display height in pixels
pub const HEIGHT: usize = 32;
