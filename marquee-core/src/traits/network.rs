//! WiFi link and HTTP client traits

use core::net::Ipv4Addr;

/// Network and HTTP transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// Host name could not be resolved
    Dns,
    /// Socket-level failure (reset, refused, TLS)
    Socket,
    /// No complete response within the timeout
    Timeout,
    /// Response body larger than the supplied buffer
    BodyTooLarge,
}

impl core::fmt::Display for NetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NetError::Dns => f.write_str("DNS resolution failed"),
            NetError::Socket => f.write_str("socket error"),
            NetError::Timeout => f.write_str("request timed out"),
            NetError::BodyTooLarge => f.write_str("response body too large"),
        }
    }
}

/// Interface addressing as reported by the WiFi driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ifconfig {
    pub ip: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
}

/// Station-mode WiFi link
pub trait Network {
    /// Start joining `ssid`; returns immediately, poll [`Network::is_connected`]
    fn connect(&mut self, ssid: &str, password: &str);

    /// Check if the link is up
    fn is_connected(&mut self) -> bool;

    /// Current interface addressing
    fn ifconfig(&mut self) -> Ifconfig;
}

/// Status line and body length of a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Number of body bytes written into the caller's buffer
    pub len: usize,
}

/// Blocking HTTP client with a hard timeout
pub trait HttpClient {
    /// Perform a GET request
    ///
    /// The body is written into `body`. Implementations must give up after
    /// `timeout_ms` and return [`NetError::Timeout`].
    fn get(
        &mut self,
        url: &str,
        headers: &[(&str, &str)],
        timeout_ms: u32,
        body: &mut [u8],
    ) -> Result<HttpResponse, NetError>;
}
