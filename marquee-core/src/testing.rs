//! Mock collaborators shared by the unit tests

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::config::EngineConfig;
use crate::frame::FrameLoop;
use crate::surface::{Icon, Image, PixelSurface};
use crate::weather::WeatherReport;
use crate::traits::{
    AssetError, AssetStore, Button, Clock, Display, DisplayError, Font, Glyph, HttpClient,
    HttpResponse, Ifconfig, Input, NetError, Network, Watchdog,
};

/// Solid block glyphs: every character except ' ' fills `advance - 1`
/// columns by `height` rows
pub struct BlockFont {
    advance: u8,
    height: u8,
    rows: [u16; 16],
}

impl BlockFont {
    pub fn new(advance: u8, height: u8) -> Self {
        let width = advance.saturating_sub(1).min(16);
        let bits = if width >= 16 { u16::MAX } else { (1u16 << width) - 1 };
        Self {
            advance,
            height,
            rows: [bits; 16],
        }
    }
}

impl Font for BlockFont {
    fn advance(&self) -> u8 {
        self.advance
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn glyph(&self, ch: char) -> Option<Glyph<'_>> {
        if ch == ' ' {
            return None;
        }
        Some(Glyph {
            rows: &self.rows[..self.height.min(16) as usize],
        })
    }
}

/// Simulated monotonic time; delays advance the clock instantly
#[derive(Clone, Default)]
pub struct SimTime {
    now: Rc<Cell<u64>>,
}

impl SimTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl DelayNs for SimTime {
    fn delay_ns(&mut self, ns: u32) {
        self.now.set(self.now.get() + (ns as u64).div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64);
    }
}

impl Clock for SimTime {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Records every present and brightness change
#[derive(Default)]
pub struct MockDisplay {
    pub presents: usize,
    pub brightness: Vec<f32>,
    /// Every presented frame, in order
    pub frames: Vec<PixelSurface>,
    /// Brightness in effect at each present
    pub present_levels: Vec<f32>,
    pub fail: bool,
    /// Clock charged `present_cost_ms` per present, if any
    pub clock: Option<SimTime>,
    pub present_cost_ms: u64,
}

impl MockDisplay {
    /// Display whose presents take `present_cost_ms` of simulated time
    pub fn timed(time: &SimTime, present_cost_ms: u32) -> Self {
        Self {
            clock: Some(time.clone()),
            present_cost_ms: present_cost_ms as u64,
            ..Default::default()
        }
    }

    pub fn last_frame(&self) -> Option<&PixelSurface> {
        self.frames.last()
    }
}

impl Display for MockDisplay {
    fn present(&mut self, surface: &PixelSurface) -> Result<(), DisplayError> {
        if let Some(clock) = &self.clock {
            clock.advance(self.present_cost_ms);
        }
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.presents += 1;
        self.frames.push(surface.clone());
        self.present_levels
            .push(self.brightness.last().copied().unwrap_or(1.0));
        Ok(())
    }

    fn set_brightness(&mut self, level: f32) -> Result<(), DisplayError> {
        self.brightness.push(level);
        if self.fail {
            return Err(DisplayError::Communication);
        }
        Ok(())
    }
}

/// Buttons held for a fixed number of polls
#[derive(Default)]
pub struct MockInput {
    pub up_polls: u32,
    pub down_polls: u32,
    pub polls: u32,
}

impl Input for MockInput {
    fn is_pressed(&mut self, button: Button) -> bool {
        let remaining = match button {
            Button::BrightnessUp => {
                self.polls += 1;
                &mut self.up_polls
            }
            Button::BrightnessDown => &mut self.down_polls,
        };
        if *remaining > 0 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Counts feeds and tracks the longest gap between them
pub struct MockWatchdog {
    time: SimTime,
    pub timeout_ms: Option<u32>,
    pub feeds: u32,
    pub last_feed_ms: u64,
    pub longest_gap_ms: u64,
}

impl MockWatchdog {
    pub fn new(time: &SimTime) -> Self {
        Self {
            time: time.clone(),
            timeout_ms: None,
            feeds: 0,
            last_feed_ms: 0,
            longest_gap_ms: 0,
        }
    }
}

impl Watchdog for MockWatchdog {
    fn initialize(&mut self, timeout_ms: u32) {
        self.timeout_ms = Some(timeout_ms);
        self.last_feed_ms = self.time.now_ms();
    }

    fn feed(&mut self) {
        let now = self.time.now_ms();
        self.longest_gap_ms = self.longest_gap_ms.max(now - self.last_feed_ms);
        self.last_feed_ms = now;
        self.feeds += 1;
    }
}

/// In-memory asset store
#[derive(Default)]
pub struct MockAssets {
    pub images: HashMap<String, Image>,
    pub icons: HashMap<String, Icon>,
    pub loads: u32,
}

impl MockAssets {
    pub fn with_image(mut self, name: &str, image: Image) -> Self {
        self.images.insert(name.to_string(), image);
        self
    }

    pub fn with_icon(mut self, name: &str, icon: Icon) -> Self {
        self.icons.insert(name.to_string(), icon);
        self
    }
}

impl AssetStore for MockAssets {
    fn load_image(&mut self, name: &str) -> Result<Image, AssetError> {
        self.loads += 1;
        self.images.get(name).cloned().ok_or(AssetError::NotFound)
    }

    fn load_icon(&mut self, name: &str) -> Result<Icon, AssetError> {
        self.loads += 1;
        self.icons.get(name).cloned().ok_or(AssetError::NotFound)
    }
}

/// WiFi link that comes up after a number of polls
pub struct MockNetwork {
    /// Polls until the link reports connected; None never connects
    pub up_after: Option<u32>,
    pub polls: u32,
    pub joins: Vec<(String, String)>,
}

impl MockNetwork {
    pub fn connected() -> Self {
        Self {
            up_after: Some(0),
            polls: 0,
            joins: Vec::new(),
        }
    }

    pub fn up_after(polls: u32) -> Self {
        Self {
            up_after: Some(polls),
            ..Self::connected()
        }
    }

    pub fn never() -> Self {
        Self {
            up_after: None,
            ..Self::connected()
        }
    }
}

impl Network for MockNetwork {
    fn connect(&mut self, ssid: &str, password: &str) {
        self.joins.push((ssid.to_string(), password.to_string()));
    }

    fn is_connected(&mut self) -> bool {
        let up = self.up_after.is_some_and(|n| self.polls >= n);
        self.polls += 1;
        up
    }

    fn ifconfig(&mut self) -> Ifconfig {
        Ifconfig {
            ip: [192, 168, 1, 50].into(),
            netmask: [255, 255, 255, 0].into(),
            gateway: [192, 168, 1, 1].into(),
            dns: [192, 168, 1, 1].into(),
        }
    }
}

/// HTTP client replaying queued responses
///
/// A queued [`NetError::Timeout`] advances simulated time by the full
/// request timeout before failing.
pub struct MockHttp {
    time: SimTime,
    pub responses: VecDeque<Result<(u16, Vec<u8>), NetError>>,
    pub requests: Vec<(String, Vec<(String, String)>, u32)>,
}

impl MockHttp {
    pub fn new(time: &SimTime) -> Self {
        Self {
            time: time.clone(),
            responses: VecDeque::new(),
            requests: Vec::new(),
        }
    }

    pub fn respond(mut self, status: u16, body: &str) -> Self {
        self.responses
            .push_back(Ok((status, body.as_bytes().to_vec())));
        self
    }

    pub fn fail(mut self, err: NetError) -> Self {
        self.responses.push_back(Err(err));
        self
    }
}

impl HttpClient for MockHttp {
    fn get(
        &mut self,
        url: &str,
        headers: &[(&str, &str)],
        timeout_ms: u32,
        body: &mut [u8],
    ) -> Result<HttpResponse, NetError> {
        self.requests.push((
            url.to_string(),
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            timeout_ms,
        ));
        match self.responses.pop_front().unwrap_or(Err(NetError::Socket)) {
            Ok((status, data)) => {
                if data.len() > body.len() {
                    return Err(NetError::BodyTooLarge);
                }
                body[..data.len()].copy_from_slice(&data);
                self.time.advance(100);
                Ok(HttpResponse {
                    status,
                    len: data.len(),
                })
            }
            Err(NetError::Timeout) => {
                self.time.advance(timeout_ms as u64);
                Err(NetError::Timeout)
            }
            Err(e) => Err(e),
        }
    }
}

/// Frame loop wired to mocks
pub type TestLoop = FrameLoop<MockDisplay, MockInput, MockWatchdog, SimTime>;

/// Frame loop with default config, no buttons held, and its clock
pub fn test_loop() -> (TestLoop, SimTime) {
    test_loop_with(MockInput::default(), &EngineConfig::default())
}

pub fn test_loop_with(input: MockInput, config: &EngineConfig) -> (TestLoop, SimTime) {
    let time = SimTime::new();
    let fl = FrameLoop::new(
        MockDisplay::default(),
        input,
        MockWatchdog::new(&time),
        time.clone(),
        config,
    );
    (fl, time)
}

/// Like [`test_loop_with`], but every present costs
/// `config.timing.present_cost_ms`
pub fn test_loop_timed(config: &EngineConfig) -> (TestLoop, SimTime) {
    let time = SimTime::new();
    let fl = FrameLoop::new(
        MockDisplay::timed(&time, config.timing.present_cost_ms),
        MockInput::default(),
        MockWatchdog::new(&time),
        time.clone(),
        config,
    );
    (fl, time)
}

/// Typical daytime report
pub fn sample_report() -> WeatherReport {
    WeatherReport {
        location: "London".try_into().unwrap(),
        condition: "Partly cloudy".try_into().unwrap(),
        icon_url: "//cdn.weatherapi.com/weather/64x64/day/116.png"
            .try_into()
            .unwrap(),
        is_day: 1,
        temp_c: 12.0,
        feelslike_c: 10.5,
        wind_mph: 8.1,
        wind_dir: "WSW".try_into().unwrap(),
        gust_mph: 12.3,
        precip_mm: 0.0,
        uv: 3.0,
    }
}
