//! JSON pixel grids

use alloc::vec::Vec;

use marquee_core::surface::{Color, Icon, Image, PixelGrid};
use marquee_core::traits::AssetError;

use crate::fmt::debug;

/// Decode a JSON array of `H` rows, each `W` `[r, g, b]` triples
///
/// Channel values above 255 or any other shape mismatch inside a pixel are
/// `Malformed`; a wrong row or column count is `WrongDimensions`.
pub fn decode_grid<const W: usize, const H: usize>(
    bytes: &[u8],
) -> Result<PixelGrid<W, H>, AssetError> {
    let rows: Vec<Vec<[u8; 3]>> =
        serde_json::from_slice(bytes).map_err(|_| AssetError::Malformed)?;

    if rows.len() != H || rows.iter().any(|row| row.len() != W) {
        debug!("grid has {} rows, expected {}x{}", rows.len(), W, H);
        return Err(AssetError::WrongDimensions);
    }

    let mut grid = [[Color::BLACK; W]; H];
    for (dst, src) in grid.iter_mut().zip(&rows) {
        for (pixel, &[r, g, b]) in dst.iter_mut().zip(src) {
            *pixel = Color::new(r, g, b);
        }
    }
    Ok(PixelGrid::from_rows(grid))
}

/// Decode a full-screen image
pub fn decode_image(bytes: &[u8]) -> Result<Image, AssetError> {
    decode_grid(bytes)
}

/// Decode a 16×16 weather icon
pub fn decode_icon(bytes: &[u8]) -> Result<Icon, AssetError> {
    decode_grid(bytes)
}
