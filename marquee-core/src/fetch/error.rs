//! Fetch errors

use crate::traits::NetError;

/// Why a fetch produced no data
///
/// Every variant is recoverable: the caller keeps its cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchError {
    /// Initial join never came up
    NotConnected,
    /// Link was down and did not return within the polling budget
    ReconnectTimeout,
    /// Transport failure, including request timeout
    Network(NetError),
    /// Server answered with a non-200 status
    Status(u16),
    /// Body could not be decoded
    Decode,
    /// SSID or password not configured
    MissingCredentials,
}

impl From<NetError> for FetchError {
    fn from(e: NetError) -> Self {
        FetchError::Network(e)
    }
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FetchError::NotConnected => f.write_str("failed to connect to WiFi"),
            FetchError::ReconnectTimeout => f.write_str("failed to reconnect to WiFi"),
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Status(code) => write!(f, "server returned status {}", code),
            FetchError::Decode => f.write_str("could not decode response"),
            FetchError::MissingCredentials => f.write_str("WiFi SSID/password required"),
        }
    }
}
