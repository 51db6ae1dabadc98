//! Image and icon asset source

use crate::surface::{Icon, Image};

/// Asset loading errors
///
/// All of these are expected at runtime; a failed asset is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// No asset with that name
    NotFound,
    /// Asset data could not be decoded
    Malformed,
    /// Decoded grid has the wrong number of rows or columns
    WrongDimensions,
    /// Asset exceeds the read buffer
    TooLarge,
}

impl core::fmt::Display for AssetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AssetError::NotFound => f.write_str("asset not found"),
            AssetError::Malformed => f.write_str("malformed asset"),
            AssetError::WrongDimensions => f.write_str("asset has wrong dimensions"),
            AssetError::TooLarge => f.write_str("asset too large"),
        }
    }
}

/// Named image and icon store
pub trait AssetStore {
    /// Load a full-screen image by name
    fn load_image(&mut self, name: &str) -> Result<Image, AssetError>;

    /// Load a 16×16 icon by name (e.g. `day/113`)
    fn load_icon(&mut self, name: &str) -> Result<Icon, AssetError>;
}
