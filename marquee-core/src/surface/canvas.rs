//! Pixel surface with a current pen
//!
//! Mirrors the physical display. All drawing goes through the pen, and every
//! write is bounds-checked: coordinates outside the surface are silently
//! dropped so a drawing primitive can never interrupt the frame loop.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::Pixel;

use super::color::Color;
use super::grid::PixelGrid;
use super::{HEIGHT, WIDTH};
use crate::traits::Font;

/// W×H frame buffer plus the current draw color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    /// Row-major pixels, `pixels[y][x]`
    pixels: [[Color; WIDTH]; HEIGHT],
    /// Current draw color
    pen: Color,
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSurface {
    /// Create a black surface with a black pen
    pub const fn new() -> Self {
        Self {
            pixels: [[Color::BLACK; WIDTH]; HEIGHT],
            pen: Color::BLACK,
        }
    }

    /// Select the draw color for subsequent primitives
    pub fn set_pen(&mut self, color: Color) {
        self.pen = color;
    }

    /// Current draw color
    pub fn pen(&self) -> Color {
        self.pen
    }

    /// Surface dimensions as (width, height)
    pub const fn bounds(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    /// Write the pen at (`x`, `y`); no-op when out of bounds
    pub fn draw_pixel(&mut self, x: i32, y: i32) {
        self.put(x, y, self.pen);
    }

    /// Read back the color at (`x`, `y`)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = Self::index(x, y)?;
        Some(self.pixels[y][x])
    }

    /// Fill every cell with the pen
    pub fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(self.pen);
        }
    }

    /// Line from (`x1`, `y1`) to (`x2`, `y2`), endpoints inclusive
    ///
    /// One pixel per step along the major axis, with the minor coordinate
    /// rounded to the nearest cell. Only the steps that land on the surface
    /// are visited, so any endpoints cost at most one pass across it.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        // (start, delta) along the major then the minor axis
        let ((m0, dm), (n0, dn), limit) = if steep {
            ((y1, y2 - y1), (x1, x2 - x1), HEIGHT as i64)
        } else {
            ((x1, x2 - x1), (y1, y2 - y1), WIDTH as i64)
        };
        let major = dm.abs();
        let (sm, sn) = (dm.signum(), dn.signum());

        // Steps i in 0..=major whose major coordinate m0 + sm * i is on screen
        let (lo, hi) = if sm < 0 {
            (m0 - (limit - 1), m0)
        } else {
            (-m0, limit - 1 - m0)
        };
        let (lo, hi) = (lo.max(0), hi.min(major));

        for i in lo..=hi {
            let offset = if major == 0 {
                0
            } else {
                // floor(i * minor / major + 1/2); the product needs 65 bits
                let num = 2 * i as i128 * dn.abs() as i128 + major as i128;
                (num / (2 * major as i128)) as i64
            };
            let (m, n) = (m0 + sm * i, n0 + sn * offset);
            if steep {
                self.plot(n, m);
            } else {
                self.plot(m, n);
            }
        }
    }

    /// Copy a grid onto the surface with its top-left corner at (`x0`, `y0`)
    ///
    /// Each cell is written through the pen, so the pen holds the last
    /// cell's color afterwards. Cells falling outside the surface are clipped.
    pub fn blit<const W: usize, const H: usize>(
        &mut self,
        grid: &PixelGrid<W, H>,
        x0: i32,
        y0: i32,
    ) {
        for row in 0..H {
            for col in 0..W {
                self.set_pen(grid.at(row, col));
                self.plot(x0 as i64 + col as i64, y0 as i64 + row as i64);
            }
        }
    }

    /// Width of `text` in pixels: glyph count × advance × scale
    pub fn measure_text<F: Font + ?Sized>(font: &F, text: &str, scale: u8) -> i32 {
        let width = text.chars().count() as i64 * font.advance() as i64 * scale as i64;
        i32::try_from(width).unwrap_or(i32::MAX)
    }

    /// Render `text` in the pen color with its top-left corner at (`x`, `y`)
    ///
    /// Characters whose cell lies entirely off the surface are skipped
    /// without touching their bitmap.
    pub fn draw_text<F: Font + ?Sized>(&mut self, font: &F, text: &str, x: i32, y: i32, scale: u8) {
        let scale = scale.max(1) as i64;
        let cell_w = font.advance() as i64 * scale;
        let (x, y) = (x as i64, y as i64);

        for (i, ch) in text.chars().enumerate() {
            let char_x = x + i as i64 * cell_w;
            if char_x >= WIDTH as i64 {
                break;
            }
            if char_x + cell_w <= 0 {
                continue;
            }
            let Some(glyph) = font.glyph(ch) else {
                continue;
            };

            for gy in 0..glyph.rows.len() {
                for gx in 0..font.advance().min(16) {
                    if !glyph.is_set(gx, gy) {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.plot(char_x + gx as i64 * scale + sx, y + gy as i64 * scale + sy);
                        }
                    }
                }
            }
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color; WIDTH]> {
        self.pixels.iter()
    }

    /// Write `color` at (`x`, `y`) without touching the pen
    fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = Self::index(x, y) {
            self.pixels[y][x] = color;
        }
    }

    /// Pen write at a widened coordinate, so offsets from any `i32` origin
    /// cannot overflow
    fn plot(&mut self, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.draw_pixel(x, y);
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, color.into());
        }
        Ok(())
    }
}
