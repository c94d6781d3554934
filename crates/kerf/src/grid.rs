//! Rasterized silhouette access.
//!
//! One intensity channel of the rasterized shape, row-major with the
//! origin top-left. Background is full intensity (255); any darker pixel
//! belongs to the shape. The grid is read-only input: the rasterizing
//! collaborator owns producing it.

use crate::scale::ConfigError;

/// Background intensity; everything below it counts as shape.
pub const BACKGROUND: u8 = 255;

/// A single-channel pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap one channel's worth of raster data.
    ///
    /// The buffer must hold exactly `width * height` values in row-major
    /// order.
    pub fn from_channel(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(ConfigError::ChannelSize { expected, got: data.len() });
        }
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw intensity at (col, row).
    #[inline]
    pub fn intensity(&self, col: u32, row: u32) -> u8 {
        debug_assert!(col < self.width && row < self.height);
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Whether the pixel at (col, row) belongs to the shape.
    #[inline]
    pub fn is_shape(&self, col: u32, row: u32) -> bool {
        self.intensity(col, row) != BACKGROUND
    }

    /// Whether the column contains at least one shape pixel.
    pub fn column_active(&self, col: u32) -> bool {
        (0..self.height).any(|row| self.is_shape(col, row))
    }

    /// Lowest and highest active column indices, or `None` when the grid
    /// is entirely background. An empty shape is a valid input, not an
    /// error.
    pub fn active_column_bounds(&self) -> Option<(u32, u32)> {
        let start = (0..self.width).find(|&col| self.column_active(col))?;
        let end = (0..self.width).rev().find(|&col| self.column_active(col))?;
        Some((start, end))
    }
}

/// Test grid builder: '#' is shape, '.' is background. One string per row.
#[cfg(test)]
pub(crate) fn grid_from_art(rows: &[&str]) -> PixelGrid {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut data = Vec::with_capacity((width * height) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "ragged test grid");
        for ch in row.chars() {
            data.push(if ch == '#' { 0 } else { BACKGROUND });
        }
    }
    PixelGrid::from_channel(width, height, data).unwrap()
}
