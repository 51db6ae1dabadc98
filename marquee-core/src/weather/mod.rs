//! Weather report model
//!
//! The decoded subset of a weatherapi.com `current.json` response, and the
//! four scrolling lines shown for it. Decoding the JSON payload lives in
//! `marquee-formats`.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{NetworkConfig, MAX_FIELD_LEN};
use crate::fmt::{debug, warn};
use crate::surface::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RapidAPI host for the weather API
pub const API_HOST: &str = "weatherapi-com.p.rapidapi.com";

/// Location field of a report
pub const LOCATION_LEN: usize = 64;

/// Condition text field of a report
pub const CONDITION_LEN: usize = 64;

/// Maximum length of a request URL: a configured location fits even when
/// every byte is percent-encoded
pub const URL_LEN: usize = 64 + 3 * MAX_FIELD_LEN;

/// Maximum length of one scrolling line; the longest line is
/// "Weather for <location>: <condition>"
pub const LINE_LEN: usize = 160;

/// Maximum length of an icon asset name
pub const ICON_NAME_LEN: usize = 32;

/// Current conditions at one location
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherReport {
    /// Location name as resolved by the API
    pub location: String<LOCATION_LEN>,
    /// Condition text, e.g. "Partly cloudy"
    pub condition: String<CONDITION_LEN>,
    /// Condition icon URL, e.g. `//cdn.weatherapi.com/weather/64x64/day/116.png`
    pub icon_url: String<128>,
    /// 1 during daytime, 0 at night
    pub is_day: u8,
    pub temp_c: f32,
    pub feelslike_c: f32,
    pub wind_mph: f32,
    /// Compass direction, e.g. "WSW"
    pub wind_dir: String<8>,
    pub gust_mph: f32,
    pub precip_mm: f32,
    pub uv: f32,
}

impl WeatherReport {
    /// Icon asset name: `day/<code>` or `night/<code>`
    ///
    /// The code is the last path segment of the icon URL with its extension
    /// removed.
    pub fn icon_name(&self) -> String<ICON_NAME_LEN> {
        let file = self.icon_url.rsplit('/').next().unwrap_or("");
        let stem = file.split('.').next().unwrap_or("");
        let prefix = if self.is_day == 1 { "day" } else { "night" };

        let mut name = String::new();
        if write!(name, "{}/{}", prefix, stem).is_err() {
            debug!("icon name for {} truncated", stem);
        }
        name
    }

    /// The four scrolling lines with their text colors
    ///
    /// A piece that would overflow [`LINE_LEN`] is dropped from its line.
    pub fn lines(&self) -> Vec<(String<LINE_LEN>, Color), 4> {
        let mut lines = Vec::new();

        let mut push = |color: Color, args: core::fmt::Arguments<'_>| {
            let mut line = String::new();
            if line.write_fmt(args).is_err() {
                debug!("weather line truncated: {}", line.as_str());
            }
            let _ = lines.push((line, color));
        };

        push(
            Color::ORANGE,
            format_args!("Weather for {}: {}", self.location, self.condition),
        );
        push(
            Color::PURPLE,
            format_args!(
                "Temperature: {}C, feels like: {}C",
                Reading(self.temp_c),
                Reading(self.feelslike_c)
            ),
        );
        push(
            Color::GREEN,
            format_args!(
                "Wind: {}MPH {}, gusts: {}MPH",
                Reading(self.wind_mph),
                self.wind_dir,
                Reading(self.gust_mph)
            ),
        );
        push(
            Color::BLUE,
            format_args!(
                "Precipitation: {}mm, UV: {}",
                Reading(self.precip_mm),
                Reading(self.uv)
            ),
        );

        lines
    }
}

/// A measurement formatted the way the API reports it: whole numbers keep
/// one decimal place (`12.0`), others print in shortest form (`5.3`)
struct Reading(f32);

impl core::fmt::Display for Reading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let v = self.0;
        if v.is_finite() && v.abs() < 1.0e7 && (v as i32) as f32 == v {
            write!(f, "{:.1}", v)
        } else {
            write!(f, "{}", v)
        }
    }
}

/// Request URL for the current weather at `location`
///
/// Characters outside the URL unreserved set are percent-encoded.
///
/// Locations longer than [`MAX_FIELD_LEN`] bytes may not fit; the query is
/// then cut short and a warning logged.
pub fn weather_url(location: &str) -> String<URL_LEN> {
    let mut url = String::new();
    let _ = write!(url, "https://{}/current.json?q=", API_HOST);
    for b in location.bytes() {
        let ok = match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b',' => {
                url.push(b as char)
            }
            _ => write!(url, "%{:02X}", b).map_err(|_| ()),
        };
        if ok.is_err() {
            warn!("location too long, query truncated");
            break;
        }
    }
    url
}

/// RapidAPI authentication headers
pub fn headers(api_key: &str) -> [(&'static str, &str); 2] {
    [("X-RapidAPI-Key", api_key), ("X-RapidAPI-Host", API_HOST)]
}

/// URL and headers for the configured location and key
pub fn request(config: &NetworkConfig) -> (String<URL_LEN>, [(&'static str, &str); 2]) {
    (weather_url(&config.location), headers(&config.api_key))
}
