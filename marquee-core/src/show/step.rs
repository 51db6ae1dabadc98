//! Playlist steps

use crate::text::BorderColors;
use crate::transition::{InvalidTransition, Rng, Transition};

/// A fixed transition code or a random pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionChoice {
    /// Numeric code, validated when the step runs
    Code(u8),
    Random,
}

impl TransitionChoice {
    /// Decode the code or draw a random transition
    pub fn resolve(self, rng: &mut Rng) -> Result<Transition, InvalidTransition> {
        match self {
            TransitionChoice::Code(code) => Transition::from_code(code),
            TransitionChoice::Random => Ok(Transition::random(rng)),
        }
    }
}

impl From<Transition> for TransitionChoice {
    fn from(t: Transition) -> Self {
        TransitionChoice::Code(t.code())
    }
}

/// One entry in a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Reveal a named image
    Image {
        name: &'a str,
        transition: TransitionChoice,
    },
    /// Clear to black
    Clear(TransitionChoice),
    /// Scroll text between two-color borders
    Banner { text: &'a str, colors: BorderColors },
    /// Scroll the cached weather report, if any
    Weather,
    /// Hold the current frame
    Pause(u32),
    /// Refresh the weather cache, or hold the frame if throttled
    RefreshWeather,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code() {
        let mut rng = Rng::new(1);
        assert_eq!(
            TransitionChoice::Code(4).resolve(&mut rng),
            Ok(Transition::BottomToTop)
        );
        assert_eq!(
            TransitionChoice::Code(42).resolve(&mut rng),
            Err(InvalidTransition(42))
        );
        assert_eq!(
            TransitionChoice::from(Transition::Fade),
            TransitionChoice::Code(6)
        );
    }

    #[test]
    fn test_resolve_random_is_valid() {
        let mut rng = Rng::new(99);
        for _ in 0..50 {
            assert!(TransitionChoice::Random.resolve(&mut rng).is_ok());
        }
    }
}
