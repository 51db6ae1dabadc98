//! Frame cadence state machine
//!
//! Tracks where the frame loop is within a frame. The sequence is always
//! draw, present, poll input, optionally sleep.

/// Frame loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// Nothing pending
    #[default]
    Idle,
    /// Surface mutated since the last present
    Presenting,
    /// Frame pushed, buttons not yet polled
    AwaitingInput,
    /// Inside a delay
    Sleeping,
}

/// Frame loop events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameEvent {
    /// A drawing primitive touched the surface
    DrawIssued,
    /// The display accepted the frame
    PresentComplete,
    /// Buttons were sampled
    InputPolled,
    /// A delay began
    DelayStarted,
    /// The delay finished
    DelayElapsed,
}

impl FrameState {
    /// Check if the surface holds changes the display has not seen
    pub fn is_dirty(&self) -> bool {
        matches!(self, FrameState::Presenting)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: FrameEvent) -> Self {
        use FrameEvent::*;
        use FrameState::*;

        match (self, event) {
            (Idle, DrawIssued) => Presenting,
            (Presenting, DrawIssued) => Presenting,

            // A present without a preceding draw (ramp frames) is still a frame
            (Idle | Presenting, PresentComplete) => AwaitingInput,

            (AwaitingInput, InputPolled) => Idle,

            (Idle, DelayStarted) => Sleeping,
            (Sleeping, DelayElapsed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_frame_cycle() {
        let state = FrameState::Idle
            .transition(FrameEvent::DrawIssued)
            .transition(FrameEvent::PresentComplete)
            .transition(FrameEvent::InputPolled);
        assert_eq!(state, FrameState::Idle);
    }

    #[test]
    fn test_draw_marks_dirty() {
        let state = FrameState::Idle.transition(FrameEvent::DrawIssued);
        assert!(state.is_dirty());
        assert!(!state.transition(FrameEvent::PresentComplete).is_dirty());
    }

    #[test]
    fn test_sleep_cycle() {
        let state = FrameState::Idle.transition(FrameEvent::DelayStarted);
        assert_eq!(state, FrameState::Sleeping);
        assert_eq!(state.transition(FrameEvent::DelayElapsed), FrameState::Idle);
    }

    #[test]
    fn test_unlisted_pairs_keep_state() {
        assert_eq!(
            FrameState::Idle.transition(FrameEvent::InputPolled),
            FrameState::Idle
        );
        assert_eq!(
            FrameState::Sleeping.transition(FrameEvent::DrawIssued),
            FrameState::Sleeping
        );
        assert_eq!(
            FrameState::AwaitingInput.transition(FrameEvent::DelayStarted),
            FrameState::AwaitingInput
        );
        assert_eq!(
            FrameState::Presenting.transition(FrameEvent::DelayElapsed),
            FrameState::Presenting
        );
    }
}
