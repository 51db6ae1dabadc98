//! Transition kinds and their numeric codes

use super::rng::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a clear or image reveal is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transition {
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
    Immediate,
    Fade,
}

/// A transition code outside 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidTransition(pub u8);

impl core::fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid transition code {}", self.0)
    }
}

impl Transition {
    /// All variants in code order
    pub const ALL: [Transition; 6] = [
        Transition::LeftToRight,
        Transition::TopToBottom,
        Transition::RightToLeft,
        Transition::BottomToTop,
        Transition::Immediate,
        Transition::Fade,
    ];

    /// Decode a numeric transition code
    pub fn from_code(code: u8) -> Result<Self, InvalidTransition> {
        match code {
            1 => Ok(Transition::LeftToRight),
            2 => Ok(Transition::TopToBottom),
            3 => Ok(Transition::RightToLeft),
            4 => Ok(Transition::BottomToTop),
            5 => Ok(Transition::Immediate),
            6 => Ok(Transition::Fade),
            _ => Err(InvalidTransition(code)),
        }
    }

    /// Numeric code, 1..=6
    pub fn code(self) -> u8 {
        match self {
            Transition::LeftToRight => 1,
            Transition::TopToBottom => 2,
            Transition::RightToLeft => 3,
            Transition::BottomToTop => 4,
            Transition::Immediate => 5,
            Transition::Fade => 6,
        }
    }

    /// Pick a transition uniformly at random
    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.range(Self::ALL.len() as u32) as usize]
    }

    /// Check if this is a pixel-by-pixel wipe
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Transition::LeftToRight
                | Transition::TopToBottom
                | Transition::RightToLeft
                | Transition::BottomToTop
        )
    }

    /// Check if the wipe walks coordinates in descending order
    pub fn is_descending(self) -> bool {
        matches!(self, Transition::RightToLeft | Transition::BottomToTop)
    }

    /// Check if the wipe draws transposed coordinates (row-wise sweep)
    pub fn is_transposed(self) -> bool {
        matches!(self, Transition::TopToBottom | Transition::BottomToTop)
    }
}

impl TryFrom<u8> for Transition {
    type Error = InvalidTransition;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Transition> for u8 {
    fn from(t: Transition) -> u8 {
        t.code()
    }
}
