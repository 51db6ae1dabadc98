//! Frame loop
//!
//! Every animation step ends in [`FrameLoop::tick`]: present the surface,
//! then poll the brightness buttons. Nothing else talks to the display.

use embedded_hal::delay::DelayNs;

use super::brightness::Brightness;
use super::state::{FrameEvent, FrameState};
use super::watchdog::WatchdogCoordinator;
use crate::config::{EngineConfig, Stride, StrideCounter, TimingConfig};
use crate::fmt::{debug, warn};
use crate::surface::PixelSurface;
use crate::traits::{Button, Clock, Display, Input, Watchdog};

/// Surface plus user brightness
///
/// Owned by the frame loop; passed around by reference, never global.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderContext {
    pub surface: PixelSurface,
    pub brightness: Brightness,
}

/// Presents frames, polls buttons and paces sleeps
pub struct FrameLoop<D, I, W, T> {
    display: D,
    input: I,
    coordinator: WatchdogCoordinator<W, T>,
    ctx: RenderContext,
    state: FrameState,
    timing: TimingConfig,
    brightness_step: f32,
    frames: u32,
}

impl<D, I, W, T> FrameLoop<D, I, W, T>
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
{
    /// Create a frame loop and apply the initial brightness
    pub fn new(display: D, input: I, watchdog: W, time: T, config: &EngineConfig) -> Self {
        let coordinator = WatchdogCoordinator::new(watchdog, time, config.liveness);
        let mut this = Self {
            display,
            input,
            coordinator,
            ctx: RenderContext {
                surface: PixelSurface::new(),
                brightness: Brightness::new(config.brightness.initial),
            },
            state: FrameState::Idle,
            timing: config.timing,
            brightness_step: config.brightness.step,
            frames: 0,
        };
        this.apply_brightness();
        this
    }

    /// Surface for drawing the next frame
    pub fn surface_mut(&mut self) -> &mut PixelSurface {
        self.state = self.state.transition(FrameEvent::DrawIssued);
        &mut self.ctx.surface
    }

    /// Surface as last drawn
    pub fn surface(&self) -> &PixelSurface {
        &self.ctx.surface
    }

    /// Present the surface and poll the buttons
    pub fn tick(&mut self) {
        self.present();
        self.poll_input(true);
    }

    /// Present one frame at a fixed display brightness
    ///
    /// Buttons are still polled and the user brightness still moves, but
    /// the new value is not pushed to the display until the ramp finishes.
    pub fn ramp_frame(&mut self, level: f32) {
        self.set_display_brightness(level);
        self.present();
        self.poll_input(false);
    }

    /// Drive the display at `level` without touching the user brightness
    pub fn set_display_brightness(&mut self, level: f32) {
        if let Err(e) = self.display.set_brightness(Brightness::new(level).get()) {
            warn!("set_brightness failed: {}", e);
        }
    }

    /// Push the user brightness to the display
    pub fn apply_brightness(&mut self) {
        self.set_display_brightness(self.ctx.brightness.get());
    }

    /// Sleep, feeding the watchdog if the wait spans more than one window
    pub fn sleep_ms(&mut self, ms: u32) {
        self.state = self.state.transition(FrameEvent::DelayStarted);
        self.coordinator.sleep_ms(ms);
        self.state = self.state.transition(FrameEvent::DelayElapsed);
    }

    /// Signal liveness
    pub fn feed(&mut self) {
        self.coordinator.feed();
    }

    /// End one iteration of a long loop; feeds when `counter` comes due
    pub fn pace(&mut self, counter: &mut StrideCounter) {
        self.coordinator.pace(counter);
    }

    /// Stride for a loop whose iterations cost `iteration_cost_ms`
    pub fn stride_for(&self, iteration_cost_ms: u32) -> Stride {
        self.coordinator.stride_for(iteration_cost_ms)
    }

    /// User brightness
    pub fn brightness(&self) -> f32 {
        self.ctx.brightness.get()
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Frames presented so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn coordinator(&self) -> &WatchdogCoordinator<W, T> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut WatchdogCoordinator<W, T> {
        &mut self.coordinator
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    fn present(&mut self) {
        if let Err(e) = self.display.present(&self.ctx.surface) {
            warn!("present failed: {}", e);
        }
        self.frames = self.frames.wrapping_add(1);
        self.state = self.state.transition(FrameEvent::PresentComplete);
    }

    fn poll_input(&mut self, apply: bool) {
        for button in [Button::BrightnessUp, Button::BrightnessDown] {
            if !self.input.is_pressed(button) {
                continue;
            }
            match button {
                Button::BrightnessUp => self.ctx.brightness.raise(self.brightness_step),
                Button::BrightnessDown => self.ctx.brightness.lower(self.brightness_step),
            }
            debug!("brightness {}", self.ctx.brightness.get());
            if apply {
                self.apply_brightness();
            }
            self.coordinator.sleep_ms(self.timing.debounce_ms);
        }
        self.state = self.state.transition(FrameEvent::InputPolled);
    }
}
