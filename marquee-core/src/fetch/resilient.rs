//! Reconnect-and-retry wrapper around the WiFi link and HTTP client
//!
//! Each stage is bounded so the watchdog can always be fed in time:
//! link polls feed on a stride, and the request timeout is strictly below
//! the watchdog budget.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use super::error::FetchError;
use crate::config::{NetworkConfig, MAX_SSID_LEN};
use crate::fmt::{debug, info, warn};
use crate::frame::WatchdogCoordinator;
use crate::traits::{Clock, HttpClient, Ifconfig, Network, Watchdog};

/// Maximum length of the connection banner
pub const BANNER_LEN: usize = 160;

/// Result of a successful join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub ssid: String<MAX_SSID_LEN>,
    pub ifconfig: Ifconfig,
}

impl ConnectionInfo {
    /// Scrolling banner shown after joining
    pub fn banner(&self) -> String<BANNER_LEN> {
        let mut s = String::new();
        let _ = write!(s, "{}", self);
        s
    }
}

impl core::fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Connected to {}; IP: {}, mask: {}, router: {}, DNS: {}",
            self.ssid,
            self.ifconfig.ip,
            self.ifconfig.netmask,
            self.ifconfig.gateway,
            self.ifconfig.dns
        )
    }
}

/// Network access that degrades to "no data" instead of failing
pub struct ResilientFetch<N, H> {
    network: N,
    http: H,
    config: NetworkConfig,
}

impl<N, H> ResilientFetch<N, H>
where
    N: Network,
    H: HttpClient,
{
    pub fn new(network: N, http: H, config: &NetworkConfig) -> Self {
        Self {
            network,
            http,
            config: config.clone(),
        }
    }

    /// Join the configured network and wait for the link
    pub fn start<W, T>(
        &mut self,
        coordinator: &mut WatchdogCoordinator<W, T>,
    ) -> Result<ConnectionInfo, FetchError>
    where
        W: Watchdog,
        T: DelayNs + Clock,
    {
        if self.config.ssid.is_empty() || self.config.password.is_empty() {
            return Err(FetchError::MissingCredentials);
        }

        self.network.connect(&self.config.ssid, &self.config.password);
        if !self.wait_for_link(coordinator) {
            warn!("failed to connect to WiFi");
            return Err(FetchError::NotConnected);
        }

        let info = ConnectionInfo {
            ssid: self.config.ssid.clone(),
            ifconfig: self.network.ifconfig(),
        };
        info!("connected to {}", info.ssid.as_str());
        Ok(info)
    }

    /// Make sure the link is up, rejoining if it dropped
    pub fn ensure_connected<W, T>(
        &mut self,
        coordinator: &mut WatchdogCoordinator<W, T>,
    ) -> Result<(), FetchError>
    where
        W: Watchdog,
        T: DelayNs + Clock,
    {
        if self.network.is_connected() {
            return Ok(());
        }

        warn!("WiFi disconnected, attempting to reconnect");
        self.network.connect(&self.config.ssid, &self.config.password);
        if self.wait_for_link(coordinator) {
            info!("WiFi reconnected");
            Ok(())
        } else {
            warn!("failed to reconnect to WiFi");
            Err(FetchError::ReconnectTimeout)
        }
    }

    /// GET `url` into `buf` and decode the body
    ///
    /// Checks the link first and feeds the watchdog right before the
    /// request, which may block for up to `fetch_timeout_ms`.
    pub fn fetch<W, T, R, E, F>(
        &mut self,
        coordinator: &mut WatchdogCoordinator<W, T>,
        url: &str,
        headers: &[(&str, &str)],
        buf: &mut [u8],
        decode: F,
    ) -> Result<R, FetchError>
    where
        W: Watchdog,
        T: DelayNs + Clock,
        F: FnOnce(&[u8]) -> Result<R, E>,
    {
        self.ensure_connected(coordinator)?;
        coordinator.feed();

        debug!("GET {}", url);
        let response = self
            .http
            .get(url, headers, self.config.fetch_timeout_ms, buf)
            .inspect_err(|e| warn!("network error: {}", e))?;

        if response.status != 200 {
            warn!("server returned status {}", response.status);
            return Err(FetchError::Status(response.status));
        }

        let body = buf.get(..response.len).ok_or(FetchError::Decode)?;
        decode(body).map_err(|_| {
            warn!("could not decode response");
            FetchError::Decode
        })
    }

    /// Poll the link once per interval, up to `reconnect_polls` times
    fn wait_for_link<W, T>(&mut self, coordinator: &mut WatchdogCoordinator<W, T>) -> bool
    where
        W: Watchdog,
        T: DelayNs + Clock,
    {
        let interval = self.config.reconnect_poll_ms;
        let mut feeder = coordinator.stride_for(interval).counter();
        let mut remaining = self.config.reconnect_polls;

        while remaining > 0 && !self.network.is_connected() {
            debug!("waiting for connection ({})", remaining);
            coordinator.sleep_ms(interval);
            remaining -= 1;
            coordinator.pace(&mut feeder);
        }
        self.network.is_connected()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}
