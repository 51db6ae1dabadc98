//! User brightness level

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Global brightness, always within 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brightness(f32);

impl Brightness {
    pub const MIN: Brightness = Brightness(0.0);
    pub const MAX: Brightness = Brightness(1.0);

    /// Create a brightness, clamping into range (NaN becomes 0.0)
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self::MIN;
        }
        Self(level.clamp(0.0, 1.0))
    }

    /// Level as a float
    pub fn get(self) -> f32 {
        self.0
    }

    /// Raise by `step`, saturating at 1.0
    pub fn raise(&mut self, step: f32) {
        *self = Self::new(self.0 + step);
    }

    /// Lower by `step`, saturating at 0.0
    pub fn lower(&mut self, step: f32) {
        *self = Self::new(self.0 - step);
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_on_construction() {
        assert_eq!(Brightness::new(1.2).get(), 1.0);
        assert_eq!(Brightness::new(-0.1).get(), 0.0);
        assert_eq!(Brightness::new(f32::NAN).get(), 0.0);
        assert_eq!(Brightness::default().get(), 0.75);
    }

    #[test]
    fn test_raise_saturates() {
        let mut b = Brightness::new(0.995);
        b.raise(0.01);
        assert_eq!(b, Brightness::MAX);
        b.raise(0.01);
        assert_eq!(b, Brightness::MAX);
    }

    #[test]
    fn test_lower_saturates() {
        let mut b = Brightness::new(0.005);
        b.lower(0.01);
        assert_eq!(b, Brightness::MIN);
    }
}
