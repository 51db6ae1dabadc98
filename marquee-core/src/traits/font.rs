//! Bitmap font collaborator

/// A single glyph bitmap
///
/// Each entry of `rows` is one pixel row, top to bottom. Bit `n` is the
/// pixel in column `n` counted from the left edge of the glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub rows: &'a [u16],
}

impl Glyph<'_> {
    /// Check if the pixel at (`col`, `row`) is set
    pub fn is_set(&self, col: u8, row: usize) -> bool {
        col < 16 && self.rows.get(row).is_some_and(|bits| bits & (1 << col) != 0)
    }
}

/// Fixed-advance bitmap font
///
/// Glyph data lives outside the engine; the compositor only needs the cell
/// metrics and per-character bitmaps.
pub trait Font {
    /// Horizontal advance per character, in pixels at scale 1
    ///
    /// 6 for the small font, 8 for the 14px outline font.
    fn advance(&self) -> u8;

    /// Glyph cell height in pixels at scale 1
    fn height(&self) -> u8;

    /// Bitmap for `ch`, or None when the font has no glyph for it
    ///
    /// Missing glyphs are skipped but still advance the pen.
    fn glyph(&self, ch: char) -> Option<Glyph<'_>>;
}
