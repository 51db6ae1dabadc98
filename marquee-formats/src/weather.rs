//! weatherapi.com `current.json` payload decoding

use alloc::string::String;

use heapless::String as HString;
use serde::Deserialize;

use marquee_core::weather::WeatherReport;

use crate::fmt::{debug, warn};

#[derive(Deserialize)]
struct Payload {
    location: Location,
    current: Current,
}

#[derive(Deserialize)]
struct Location {
    name: String,
}

#[derive(Deserialize)]
struct Current {
    condition: Condition,
    is_day: u8,
    temp_c: f32,
    feelslike_c: f32,
    wind_mph: f32,
    wind_dir: String,
    gust_mph: f32,
    precip_mm: f32,
    uv: f32,
}

#[derive(Deserialize)]
struct Condition {
    text: String,
    icon: String,
}

/// Copy `s` into a bounded string, dropping whole characters that do not fit
fn bounded<const N: usize>(s: &str) -> HString<N> {
    let mut out = HString::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            debug!("truncated field to {} bytes", N);
            break;
        }
    }
    out
}

/// Decode a `current.json` response body
///
/// Unknown fields are ignored. Returns `None` if a field the display uses is
/// missing or has the wrong type; matches
/// [`WeatherDecoder`](marquee_core::show::WeatherDecoder).
pub fn decode_weather(body: &[u8]) -> Option<WeatherReport> {
    let payload: Payload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(_) => {
            warn!("weather payload did not decode ({} bytes)", body.len());
            return None;
        }
    };

    let current = payload.current;
    Some(WeatherReport {
        location: bounded(&payload.location.name),
        condition: bounded(&current.condition.text),
        icon_url: bounded(&current.condition.icon),
        is_day: current.is_day,
        temp_c: current.temp_c,
        feelslike_c: current.feelslike_c,
        wind_mph: current.wind_mph,
        wind_dir: bounded(&current.wind_dir),
        gust_mph: current.gust_mph,
        precip_mm: current.precip_mm,
        uv: current.uv,
    })
}
