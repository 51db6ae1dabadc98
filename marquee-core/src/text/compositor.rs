//! Scrolling text compositor

use embedded_hal::delay::DelayNs;

use super::scroll::ScrollState;
use crate::fmt::{debug, warn};
use crate::frame::FrameLoop;
use crate::surface::{Color, PixelSurface, HEIGHT, WIDTH};
use crate::traits::{AssetStore, Clock, Display, Font, Input, Watchdog};
use crate::transition::DrawOutcome;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors for bordered text: the text and two border lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BorderColors {
    pub text: Color,
    /// Lines at y = 1 and y = H - 2
    pub inner: Color,
    /// Lines at y = 0 and y = H - 1
    pub outer: Color,
}

impl BorderColors {
    pub const fn new(text: Color, inner: Color, outer: Color) -> Self {
        Self { text, inner, outer }
    }
}

/// Scroll `text` across the middle of the screen between two-color borders
pub fn scroll_bordered<D, I, W, T, F>(
    fl: &mut FrameLoop<D, I, W, T>,
    font: &F,
    text: &str,
    colors: BorderColors,
) where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    F: Font + ?Sized,
{
    let text_top = (WIDTH / 2) as i32 - font.height() as i32 / 2;
    let right = WIDTH as i32;
    let bottom = HEIGHT as i32;

    scroll(fl, font, text, |surface, x| {
        surface.set_pen(colors.outer);
        surface.draw_line(0, 0, right, 0);
        surface.set_pen(colors.inner);
        surface.draw_line(0, 1, right, 1);

        surface.set_pen(colors.text);
        surface.draw_text(font, text, x, text_top, 1);

        surface.set_pen(colors.inner);
        surface.draw_line(0, bottom - 2, right, bottom - 2);
        surface.set_pen(colors.outer);
        surface.draw_line(0, bottom - 1, right, bottom - 1);
    });
}

/// Scroll `text` along the bottom with a 16×16 icon above it
///
/// The icon is loaded once. If it cannot be loaded nothing is drawn.
pub fn scroll_with_icon<D, I, W, T, F, A>(
    fl: &mut FrameLoop<D, I, W, T>,
    font: &F,
    assets: &mut A,
    text: &str,
    color: Color,
    icon: &str,
) -> DrawOutcome
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    F: Font + ?Sized,
    A: AssetStore,
{
    let icon = match assets.load_icon(icon) {
        Ok(icon) => icon,
        Err(e) => {
            warn!("error loading icon {}: {}", icon, e);
            return DrawOutcome::Skipped;
        }
    };

    let icon_left = (WIDTH / 4) as i32;
    let text_top = HEIGHT as i32 - font.height() as i32;

    scroll(fl, font, text, |surface, x| {
        surface.blit(&icon, icon_left, 0);
        surface.set_pen(color);
        surface.draw_text(font, text, x, text_top, 1);
    });
    DrawOutcome::Drawn
}

/// Static lines of text, top-left aligned, one present
///
/// Lines are spaced one pixel further apart than the font height.
pub fn fixed_text<D, I, W, T, F>(fl: &mut FrameLoop<D, I, W, T>, font: &F, lines: &[(&str, Color)])
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    F: Font + ?Sized,
{
    let pitch = font.height() as i32 + 1;
    let surface = fl.surface_mut();
    surface.set_pen(Color::BLACK);
    surface.clear();
    for (i, (text, color)) in lines.iter().enumerate() {
        surface.set_pen(*color);
        surface.draw_text(font, text, 0, i as i32 * pitch, 1);
    }
    surface.set_pen(Color::BLACK);
    fl.tick();
}

/// Shared scroll loop: clear, compose, present, sleep, feed on stride
fn scroll<D, I, W, T, F, C>(fl: &mut FrameLoop<D, I, W, T>, font: &F, text: &str, mut compose: C)
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    F: Font + ?Sized,
    C: FnMut(&mut PixelSurface, i32),
{
    let width = PixelSurface::measure_text(font, text, 1);
    let delay = fl.timing().scroll_frame_ms;
    let frame_cost = delay + fl.timing().render_overhead_ms;
    let mut feeder = fl.stride_for(frame_cost).counter();

    let frames = ScrollState::new(WIDTH as i32, width);
    debug!("scrolling {} px over {} frames", width, frames.len());

    for x in frames {
        let surface = fl.surface_mut();
        surface.set_pen(Color::BLACK);
        surface.clear();
        compose(surface, x);
        surface.set_pen(Color::BLACK);

        fl.tick();
        fl.sleep_ms(delay);

        fl.pace(&mut feeder);
    }
}
