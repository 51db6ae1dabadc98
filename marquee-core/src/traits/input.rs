//! Button input trait

/// Logical buttons the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    BrightnessUp,
    BrightnessDown,
}

/// Sampled button state
///
/// Polled once per frame; there are no interrupts or events.
pub trait Input {
    /// Check if `button` is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;
}
