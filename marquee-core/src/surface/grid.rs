//! Decoded pixel grids (images and icons)

use super::color::Color;
use super::{HEIGHT, WIDTH};

/// Icon edge length in pixels
pub const ICON_SIZE: usize = 16;

/// Immutable W×H grid of colors, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<const W: usize, const H: usize> {
    rows: [[Color; W]; H],
}

/// Full-screen image
pub type Image = PixelGrid<WIDTH, HEIGHT>;

/// 16×16 weather icon
pub type Icon = PixelGrid<ICON_SIZE, ICON_SIZE>;

impl<const W: usize, const H: usize> PixelGrid<W, H> {
    /// Create a grid from its rows
    pub const fn from_rows(rows: [[Color; W]; H]) -> Self {
        Self { rows }
    }

    /// Create a grid filled with a single color
    pub const fn filled(color: Color) -> Self {
        Self {
            rows: [[color; W]; H],
        }
    }

    /// Grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (W, H)
    }

    /// Color at (`col`, `row`), or None when outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<Color> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Color at `[row][col]`; both indices must be in range
    pub(crate) fn at(&self, row: usize, col: usize) -> Color {
        self.rows[row][col]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Color; W]> {
        self.rows.iter()
    }
}

impl<const W: usize, const H: usize> Default for PixelGrid<W, H> {
    fn default() -> Self {
        Self::filled(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bounds() {
        let icon = Icon::filled(Color::RED);
        assert_eq!(icon.dimensions(), (16, 16));
        assert_eq!(icon.get(15, 15), Some(Color::RED));
        assert_eq!(icon.get(16, 0), None);
        assert_eq!(icon.get(0, 16), None);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut rows = [[Color::BLACK; 4]; 2];
        rows[1][3] = Color::BLUE;
        let grid = PixelGrid::from_rows(rows);
        assert_eq!(grid.get(3, 1), Some(Color::BLUE));
        assert_eq!(grid.at(1, 3), Color::BLUE);
        assert_eq!(grid.get(1, 3), None);
    }
}
