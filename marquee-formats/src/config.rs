//! TOML engine configuration
//!
//! Every section and key is optional; missing values keep their defaults.
//!
//! ```toml
//! [timing]
//! scroll_frame_ms = 40
//!
//! [network]
//! ssid = "office"
//! password = "correct horse"
//! location = "Amsterdam"
//! api_key = "..."
//!
//! [liveness]
//! budget_ms = 8000
//! safety_margin = 3
//! ```

use marquee_core::config::{ConfigError, EngineConfig};

use crate::fmt::{info, warn};

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Config bytes are not UTF-8
    InvalidUtf8,
    /// TOML syntax error, unknown value type or overlong string
    TomlParse,
    /// Parsed, but violates the liveness contract
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::InvalidUtf8 => f.write_str("config is not valid UTF-8"),
            LoadError::TomlParse => f.write_str("config is not valid TOML"),
            LoadError::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<EngineConfig, LoadError> {
    let config: EngineConfig = toml::from_str(input).map_err(|_| LoadError::TomlParse)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration read from storage
pub fn load_config(bytes: &[u8]) -> Result<EngineConfig, LoadError> {
    let input = core::str::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8)?;
    parse_config(input)
}

/// Parse stored configuration, falling back to defaults if there is none or
/// it does not load
pub fn load_or_default(bytes: Option<&[u8]>) -> EngineConfig {
    let Some(bytes) = bytes else {
        info!("no stored config, using defaults");
        return EngineConfig::default();
    };

    match load_config(bytes) {
        Ok(config) => {
            info!(
                "loaded config: budget {}ms, margin {}",
                config.liveness.budget_ms, config.liveness.safety_margin
            );
            config
        }
        Err(e) => {
            warn!("config rejected ({}), using defaults", e);
            EngineConfig::default()
        }
    }
}
