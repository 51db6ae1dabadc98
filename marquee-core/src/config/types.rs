//! Engine configuration types
//!
//! Defaults match the constants the display has always run with; a TOML
//! file (see `marquee-formats`) only needs to override what differs.

use heapless::String;

use super::liveness::{LivenessPolicy, Stride};
use crate::surface::HEIGHT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum SSID length (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum length of other short config strings
pub const MAX_FIELD_LEN: usize = 64;

/// Frame and animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Delay between scroll frames
    pub scroll_frame_ms: u32,
    /// Number of brightness steps in a fade
    pub fade_steps: u16,
    /// Delay between fade steps
    pub fade_step_ms: u32,
    /// Wait after a detected button press
    pub debounce_ms: u32,
    /// How long a finished image stays on screen
    pub hold_ms: u32,
    /// Estimated cost of one present, used to size the wipe stride
    pub present_cost_ms: u32,
    /// Estimated render cost of one scroll frame on top of the delay
    pub render_overhead_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            scroll_frame_ms: 50,
            fade_steps: 20,
            fade_step_ms: 50,
            debounce_ms: 10,
            hold_ms: 2000,
            present_cost_ms: 20,
            render_overhead_ms: 3,
        }
    }
}

/// User brightness settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrightnessConfig {
    /// Brightness at power-on
    pub initial: f32,
    /// Change per frame while a brightness button is held
    pub step: f32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            initial: 0.75,
            step: 0.01,
        }
    }
}

/// WiFi credentials and weather API settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
    /// Weather location query (city name, postcode, lat/long)
    pub location: String<MAX_FIELD_LEN>,
    /// RapidAPI key
    pub api_key: String<MAX_FIELD_LEN>,
    /// Request timeout; must stay below the watchdog budget
    pub fetch_timeout_ms: u32,
    /// Link polls while waiting for (re)connection
    pub reconnect_polls: u16,
    /// Delay between link polls
    pub reconnect_poll_ms: u32,
    /// Minimum time between weather fetch attempts
    pub refresh_interval_ms: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            location: String::new(),
            api_key: String::new(),
            fetch_timeout_ms: 7000,
            reconnect_polls: 30,
            reconnect_poll_ms: 1000,
            refresh_interval_ms: 300_000,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub timing: TimingConfig,
    pub brightness: BrightnessConfig,
    pub network: NetworkConfig,
    pub liveness: LivenessPolicy,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness outside 0.0..=1.0 or a non-positive step
    InvalidBrightness,
    /// Fade needs at least one step
    InvalidFadeSteps,
    /// Fetch timeout is not below the watchdog budget
    FetchTimeoutExceedsBudget,
    /// A single loop iteration takes longer than the feed window
    IterationExceedsWindow,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidBrightness => f.write_str("brightness must be within 0.0..=1.0"),
            ConfigError::InvalidFadeSteps => f.write_str("fade needs at least one step"),
            ConfigError::FetchTimeoutExceedsBudget => {
                f.write_str("fetch timeout must be below the watchdog budget")
            }
            ConfigError::IterationExceedsWindow => {
                f.write_str("loop iteration exceeds the watchdog feed window")
            }
        }
    }
}

impl EngineConfig {
    /// Check the configuration against the liveness contract
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.brightness;
        if !(0.0..=1.0).contains(&b.initial) || !(b.step > 0.0 && b.step <= 1.0) {
            return Err(ConfigError::InvalidBrightness);
        }

        if self.timing.fade_steps == 0 {
            return Err(ConfigError::InvalidFadeSteps);
        }

        if self.network.fetch_timeout_ms >= self.liveness.budget_ms {
            return Err(ConfigError::FetchTimeoutExceedsBudget);
        }

        let window = self.liveness.feed_window_ms();
        let slowest = self
            .scroll_frame_cost_ms()
            .max(self.wipe_column_cost_ms())
            .max(self.network.reconnect_poll_ms)
            .max(self.timing.fade_step_ms);
        if slowest > window {
            return Err(ConfigError::IterationExceedsWindow);
        }

        Ok(())
    }

    /// Estimated wall time of one scroll frame
    pub fn scroll_frame_cost_ms(&self) -> u32 {
        self.timing.scroll_frame_ms + self.timing.render_overhead_ms
    }

    /// Estimated wall time of one wipe column (one present per pixel)
    pub fn wipe_column_cost_ms(&self) -> u32 {
        HEIGHT as u32 * self.timing.present_cost_ms
    }

    /// Feed stride for scrolling text, in frames
    pub fn scroll_stride(&self) -> Stride {
        self.liveness.stride_for(self.scroll_frame_cost_ms())
    }

    /// Feed stride for directional wipes, in columns
    pub fn wipe_stride(&self) -> Stride {
        self.liveness.stride_for(self.wipe_column_cost_ms())
    }

    /// Feed stride while waiting for the WiFi link, in polls
    pub fn reconnect_stride(&self) -> Stride {
        self.liveness.stride_for(self.network.reconnect_poll_ms)
    }
}
