//! Show runner
//!
//! Plays a list of [`Step`]s: images, clears, bordered banners and the
//! weather block. The watchdog is fed after every step, on top of whatever
//! the step itself feeds.

pub mod step;

pub use step::{Step, TransitionChoice};

use embedded_hal::delay::DelayNs;

use crate::fetch::{Cached, ConnectionInfo, FetchError, RefreshOutcome, ResilientFetch};
use crate::fmt::{info, warn};
use crate::frame::FrameLoop;
use crate::surface::Color;
use crate::text::{fixed_text, scroll_bordered, scroll_with_icon, BorderColors};
use crate::traits::{AssetStore, Clock, Display, Font, HttpClient, Input, Network, Watchdog};
use crate::transition::{clear, draw_image, DrawOutcome, InvalidTransition, Rng, Transition};
use crate::weather::{self, WeatherReport};

/// Size of the HTTP response buffer
pub const BODY_LEN: usize = 2048;

/// Weather payload decoder
pub type WeatherDecoder = fn(&[u8]) -> Option<WeatherReport>;

/// Playlist state and the collaborators steps need beyond the frame loop
pub struct Show<A, F, N, H> {
    assets: A,
    font: F,
    fetch: ResilientFetch<N, H>,
    weather: Cached<WeatherReport>,
    decode: WeatherDecoder,
    rng: Rng,
    body: [u8; BODY_LEN],
}

impl<A, F, N, H> Show<A, F, N, H>
where
    A: AssetStore,
    F: Font,
    N: Network,
    H: HttpClient,
{
    /// Create a show; `font` is used for all scrolling text
    pub fn new(
        assets: A,
        font: F,
        fetch: ResilientFetch<N, H>,
        decode: WeatherDecoder,
        seed: u32,
    ) -> Self {
        let interval = fetch.config().refresh_interval_ms;
        Self {
            assets,
            font,
            fetch,
            weather: Cached::new(interval),
            decode,
            rng: Rng::new(seed),
            body: [0; BODY_LEN],
        }
    }

    /// Join WiFi with a status screen, then scroll the connection banner
    ///
    /// `status_font` renders the "WLAN:" screen shown while joining.
    pub fn connect<D, I, W, T, S>(
        &mut self,
        fl: &mut FrameLoop<D, I, W, T>,
        status_font: &S,
    ) -> Result<ConnectionInfo, FetchError>
    where
        D: Display,
        I: Input,
        W: Watchdog,
        T: DelayNs + Clock,
        S: Font + ?Sized,
    {
        let ssid = self.fetch.config().ssid.clone();
        fixed_text(
            fl,
            status_font,
            &[("WLAN:", Color::PURPLE), (ssid.as_str(), Color::ORANGE)],
        );
        fl.feed();

        let conn = self.fetch.start(fl.coordinator_mut())?;
        fl.feed();

        let banner = conn.banner();
        scroll_bordered(
            fl,
            &self.font,
            &banner,
            BorderColors::new(Color::PURPLE, Color::ORANGE, Color::ORANGE),
        );
        clear(fl, Transition::Fade);
        Ok(conn)
    }

    /// Play every step once, in order
    pub fn run<D, I, W, T>(
        &mut self,
        fl: &mut FrameLoop<D, I, W, T>,
        steps: &[Step<'_>],
    ) -> Result<(), InvalidTransition>
    where
        D: Display,
        I: Input,
        W: Watchdog,
        T: DelayNs + Clock,
    {
        fl.feed();
        for step in steps {
            self.run_step(fl, step)?;
        }
        Ok(())
    }

    /// Play one step and feed the watchdog
    ///
    /// Fails only on a transition code outside 1..=6, before anything is
    /// drawn.
    pub fn run_step<D, I, W, T>(
        &mut self,
        fl: &mut FrameLoop<D, I, W, T>,
        step: &Step<'_>,
    ) -> Result<(), InvalidTransition>
    where
        D: Display,
        I: Input,
        W: Watchdog,
        T: DelayNs + Clock,
    {
        match *step {
            Step::Image { name, transition } => {
                let transition = transition.resolve(&mut self.rng)?;
                draw_image(fl, &mut self.assets, name, transition);
            }
            Step::Clear(transition) => {
                let transition = transition.resolve(&mut self.rng)?;
                clear(fl, transition);
            }
            Step::Banner { text, colors } => {
                scroll_bordered(fl, &self.font, text, colors);
            }
            Step::Weather => self.show_weather(fl),
            Step::Pause(ms) => fl.sleep_ms(ms),
            Step::RefreshWeather => {
                if self.refresh_weather(fl) == RefreshOutcome::Throttled {
                    // Keep the current image up instead
                    let hold = fl.timing().hold_ms;
                    fl.sleep_ms(hold);
                }
            }
        }
        fl.feed();
        Ok(())
    }

    /// Fetch fresh weather if the refresh interval has passed
    pub fn refresh_weather<D, I, W, T>(&mut self, fl: &mut FrameLoop<D, I, W, T>) -> RefreshOutcome
    where
        D: Display,
        I: Input,
        W: Watchdog,
        T: DelayNs + Clock,
    {
        let now = fl.coordinator().now_ms();
        let config = self.fetch.config().clone();
        let (url, headers) = weather::request(&config);
        let decode = self.decode;

        let fetch = &mut self.fetch;
        let body = &mut self.body;
        self.weather.refresh(now, || {
            fetch.fetch(fl.coordinator_mut(), &url, &headers, body, |b| decode(b).ok_or(()))
        })
    }

    /// Scroll the four weather lines with the condition icon, then fade out
    ///
    /// Skipped entirely when no report has been fetched yet.
    fn show_weather<D, I, W, T>(&mut self, fl: &mut FrameLoop<D, I, W, T>)
    where
        D: Display,
        I: Input,
        W: Watchdog,
        T: DelayNs + Clock,
    {
        let Some(report) = self.weather.get() else {
            info!("no weather data available, skipping weather display");
            return;
        };

        let icon = report.icon_name();
        for (text, color) in report.lines() {
            if scroll_with_icon(fl, &self.font, &mut self.assets, &text, color, &icon)
                == DrawOutcome::Skipped
            {
                warn!("weather icon {} missing", icon.as_str());
            }
            fl.feed();
        }
        clear(fl, Transition::Fade);
    }

    /// Last successfully fetched report
    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.get()
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn fetch(&self) -> &ResilientFetch<N, H> {
        &self.fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::surface::{Icon, Image, PixelSurface};
    use crate::testing::{
        sample_report, test_loop, BlockFont, MockAssets, MockHttp, MockNetwork, SimTime, TestLoop,
    };

    type TestShow = Show<MockAssets, BlockFont, MockNetwork, MockHttp>;

    fn decode_sample(body: &[u8]) -> Option<WeatherReport> {
        (body == b"sunny").then(sample_report)
    }

    fn show(http: MockHttp, assets: MockAssets) -> TestShow {
        let mut network = EngineConfig::default().network;
        network.ssid = "home".try_into().unwrap();
        network.password = "pw".try_into().unwrap();
        Show::new(
            assets,
            BlockFont::new(8, 14),
            ResilientFetch::new(MockNetwork::connected(), http, &network),
            decode_sample,
            1234,
        )
    }

    fn setup(respond: &[(u16, &str)], assets: MockAssets) -> (TestShow, TestLoop, SimTime) {
        let (fl, time) = test_loop();
        let mut http = MockHttp::new(&time);
        for (status, body) in respond {
            http = http.respond(*status, body);
        }
        (show(http, assets), fl, time)
    }

    #[test]
    fn test_invalid_transition_propagates() {
        let (mut show, mut fl, _) = setup(&[], MockAssets::default());
        let step = Step::Clear(TransitionChoice::Code(9));
        assert_eq!(show.run_step(&mut fl, &step), Err(InvalidTransition(9)));
        assert_eq!(fl.display().presents, 0);

        let steps = [
            Step::Pause(10),
            Step::Image {
                name: "tree",
                transition: TransitionChoice::Code(0),
            },
        ];
        assert_eq!(show.run(&mut fl, &steps), Err(InvalidTransition(0)));
    }

    #[test]
    fn test_each_step_feeds() {
        let (mut show, mut fl, _) = setup(&[], MockAssets::default());
        let steps = [
            Step::Pause(10),
            Step::Clear(TransitionChoice::Code(5)),
            Step::Weather,
        ];
        show.run(&mut fl, &steps).unwrap();
        // One at the start of the pass, one per step
        assert_eq!(fl.coordinator().feeds(), 4);
    }

    #[test]
    fn test_weather_skipped_without_data() {
        let assets = MockAssets::default().with_icon("day/116", Icon::filled(Color::GOLD));
        let (mut show, mut fl, _) = setup(&[], assets);
        show.run_step(&mut fl, &Step::Weather).unwrap();
        assert_eq!(fl.display().presents, 0);
        assert_eq!(show.assets().loads, 0);
    }

    #[test]
    fn test_refresh_then_weather_block() {
        let assets = MockAssets::default().with_icon("day/116", Icon::filled(Color::GOLD));
        let (mut show, mut fl, _) = setup(&[(200, "sunny")], assets);

        show.run_step(&mut fl, &Step::RefreshWeather).unwrap();
        assert_eq!(show.weather(), Some(&sample_report()));
        let (url, headers, _) = &show.fetch().http().requests[0];
        assert_eq!(url, "https://weatherapi-com.p.rapidapi.com/current.json?q=");
        assert_eq!(headers[1].1, "weatherapi-com.p.rapidapi.com");

        show.run_step(&mut fl, &Step::Weather).unwrap();
        // Icon loaded once per line
        assert_eq!(show.assets().loads, 4);
        // Ends faded out to black at user brightness
        assert_eq!(*fl.surface(), PixelSurface::new());
        assert_eq!(*fl.display().brightness.last().unwrap(), 0.75);
    }

    #[test]
    fn test_failed_refresh_keeps_old_report() {
        let (mut show, mut fl, time) = setup(&[(200, "sunny"), (500, "")], MockAssets::default());
        assert_eq!(show.refresh_weather(&mut fl), RefreshOutcome::Updated);

        // Within the interval: throttled, and the step holds the image instead
        let before = time.now_ms();
        show.run_step(&mut fl, &Step::RefreshWeather).unwrap();
        assert_eq!(time.now_ms() - before, 2000);

        time.advance(300_001);
        assert_eq!(
            show.refresh_weather(&mut fl),
            RefreshOutcome::Failed(FetchError::Status(500))
        );
        assert_eq!(show.weather(), Some(&sample_report()));
    }

    #[test]
    fn test_undecodable_weather_is_no_data() {
        let (mut show, mut fl, _) = setup(&[(200, "{}")], MockAssets::default());
        assert_eq!(
            show.refresh_weather(&mut fl),
            RefreshOutcome::Failed(FetchError::Decode)
        );
        assert!(show.weather().is_none());
    }

    #[test]
    fn test_image_step_with_random_transition() {
        let assets = MockAssets::default().with_image("slonik", Image::filled(Color::GREEN));
        let (mut show, mut fl, _) = setup(&[], assets);
        let step = Step::Image {
            name: "slonik",
            transition: TransitionChoice::Random,
        };
        show.run_step(&mut fl, &step).unwrap();
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(fl.surface().pixel(x, y), Some(Color::GREEN));
            }
        }
    }

    #[test]
    fn test_connect_shows_status_and_banner() {
        let (mut show, mut fl, _) = setup(&[], MockAssets::default());
        let status = BlockFont::new(6, 7);
        let conn = show.connect(&mut fl, &status).unwrap();
        assert_eq!(conn.ssid.as_str(), "home");
        // First frame is the static status screen
        let first = &fl.display().frames[0];
        assert_eq!(first.pixel(0, 0), Some(Color::PURPLE));
        assert_eq!(first.pixel(0, 8), Some(Color::ORANGE));
        // Banner scrolled, then faded out
        assert!(fl.display().presents > 100);
        assert_eq!(*fl.surface(), PixelSurface::new());
    }
}
