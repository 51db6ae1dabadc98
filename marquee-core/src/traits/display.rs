//! Display driver trait for the LED matrix

use crate::surface::PixelSurface;

/// Errors reported by the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Transfer to the panel failed
    Communication,
    /// Driver not initialized
    NotInitialized,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication error"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
        }
    }
}

/// Physical pixel output
///
/// The engine batches all mutations for a frame onto the [`PixelSurface`]
/// and then calls [`Display::present`] once.
pub trait Display {
    /// Push the whole surface to the panel
    fn present(&mut self, surface: &PixelSurface) -> Result<(), DisplayError>;

    /// Set global panel brightness, 0.0 to 1.0
    fn set_brightness(&mut self, level: f32) -> Result<(), DisplayError>;
}
