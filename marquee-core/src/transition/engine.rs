//! Clearing and image reveal
//!
//! Directional wipes present one pixel per frame. Fades hold the surface
//! still and ramp the display brightness instead.

use embedded_hal::delay::DelayNs;

use super::interpolate::interpolate;
use super::kind::Transition;
use crate::fmt::{debug, warn};
use crate::frame::FrameLoop;
use crate::surface::{Color, Image, PixelSurface, HEIGHT, WIDTH};
use crate::traits::{AssetStore, Clock, Display, Input, Watchdog};

/// Result of a draw that depends on an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOutcome {
    Drawn,
    /// Asset could not be loaded; nothing was drawn
    Skipped,
}

/// Clear the display to black using `transition`
pub fn clear<D, I, W, T>(fl: &mut FrameLoop<D, I, W, T>, transition: Transition)
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
{
    debug!("clear {}", transition);
    fl.surface_mut().set_pen(Color::BLACK);

    match transition {
        Transition::Immediate => {
            fl.surface_mut().clear();
            fl.tick();
        }
        Transition::Fade => {
            let steps = fl.timing().fade_steps;
            let delay = fl.timing().fade_step_ms;
            for level in interpolate(fl.brightness(), 0.0, steps) {
                fl.ramp_frame(level);
                fl.sleep_ms(delay);
            }
            fl.surface_mut().clear();
            fl.apply_brightness();
            fl.tick();
        }
        _ => wipe(fl, transition, |surface, x, y| surface.draw_pixel(x, y)),
    }
}

/// Load image `name` and reveal it using `transition`
///
/// A missing or malformed asset is logged and skipped; the surface is left
/// untouched.
pub fn draw_image<D, I, W, T, A>(
    fl: &mut FrameLoop<D, I, W, T>,
    assets: &mut A,
    name: &str,
    transition: Transition,
) -> DrawOutcome
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    A: AssetStore,
{
    let image = match assets.load_image(name) {
        Ok(image) => image,
        Err(e) => {
            warn!("error loading image {}: {}", name, e);
            return DrawOutcome::Skipped;
        }
    };
    debug!("draw image {} with {}", name, transition);
    reveal(fl, &image, transition);
    DrawOutcome::Drawn
}

/// Reveal an already decoded image
pub fn reveal<D, I, W, T>(fl: &mut FrameLoop<D, I, W, T>, image: &Image, transition: Transition)
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
{
    match transition {
        Transition::Immediate => {
            fl.surface_mut().blit(image, 0, 0);
            fl.tick();
        }
        Transition::Fade => {
            let target = fl.brightness();
            let steps = fl.timing().fade_steps;
            let delay = fl.timing().fade_step_ms;

            let surface = fl.surface_mut();
            surface.set_pen(Color::BLACK);
            surface.clear();
            fl.ramp_frame(0.0);

            fl.surface_mut().blit(image, 0, 0);
            for level in interpolate(0.0, target, steps) {
                fl.ramp_frame(level);
                fl.sleep_ms(delay);
            }
            // The ramp may end short of the user level: a single step stays
            // at 0, and buttons can move the level mid-ramp
            fl.apply_brightness();
        }
        _ => wipe(fl, transition, |surface, x, y| {
            surface.set_pen(image.at(y as usize, x as usize));
            surface.draw_pixel(x, y);
        }),
    }
}

/// Visit every pixel in wipe order, presenting after each one
///
/// Columns (x) are the outer loop and rows (y) the inner one. Top/bottom
/// wipes draw the transposed coordinate, so they sweep row by row. The
/// watchdog is fed every `wipe_stride` outer iterations.
fn wipe<D, I, W, T, F>(fl: &mut FrameLoop<D, I, W, T>, transition: Transition, mut paint: F)
where
    D: Display,
    I: Input,
    W: Watchdog,
    T: DelayNs + Clock,
    F: FnMut(&mut PixelSurface, i32, i32),
{
    let column_cost = HEIGHT as u32 * fl.timing().present_cost_ms;
    let mut feeder = fl.stride_for(column_cost).counter();

    for (a, b) in wipe_order(transition) {
        let (x, y) = if transition.is_transposed() {
            (b, a)
        } else {
            (a, b)
        };
        paint(fl.surface_mut(), x, y);
        fl.tick();

        if b == last_inner(transition) {
            fl.pace(&mut feeder);
        }
    }
}

/// (outer, inner) pairs for a directional transition
///
/// Empty for non-directional transitions.
pub fn wipe_order(transition: Transition) -> impl Iterator<Item = (i32, i32)> {
    let n_outer = if transition.is_directional() { WIDTH } else { 0 };
    let descending = transition.is_descending();
    let step = move |i: usize, n: usize| {
        if descending {
            (n - 1 - i) as i32
        } else {
            i as i32
        }
    };
    (0..n_outer).flat_map(move |a| (0..HEIGHT).map(move |b| (step(a, WIDTH), step(b, HEIGHT))))
}

fn last_inner(transition: Transition) -> i32 {
    if transition.is_descending() {
        0
    } else {
        HEIGHT as i32 - 1
    }
}
