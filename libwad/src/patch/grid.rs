use crate::{Error, Result};

/// Decoded patch pixels: one palette index per cell, row-major
///
/// Cells not covered by a post keep the value 0.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct IndexedPixelGrid {
    /// The width of the image
    width: u16,
    /// The height of the image
    height: u16,
    /// Image pixels
    pixels: Vec<u8>,
}

impl IndexedPixelGrid {
    /// Allocates a zero-filled grid for a patch header's dimensions
    ///
    /// # Errors
    ///
    /// Errors if either dimension is not positive, or if `width * height` overflows `usize`.
    /// Two positive `i16` values always multiply within 30 bits, so [`Error::DimensionOverflow`]
    /// can only occur on targets whose `usize` is 16 bits wide.
    pub fn zeroed(width: i16, height: i16) -> Result<Self> {
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(Error::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = usize::from(w)
            .checked_mul(usize::from(h))
            .ok_or(Error::DimensionOverflow { width, height })?;
        Ok(Self {
            width: w,
            height: h,
            pixels: vec![0; len],
        })
    }

    /// Returns the width of the image
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the image
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the pixel indexes of the image, row-major
    #[must_use]
    pub fn pixel_indices(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the index at (`row`, `col`), or [`None`] outside the grid
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < usize::from(self.height) && col < usize::from(self.width))
            .then(|| self.pixels[row * usize::from(self.width) + col])
    }

    /// set the value of a specific pixel, ignoring writes outside the grid
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < usize::from(self.height) && col < usize::from(self.width) {
            self.pixels[row * usize::from(self.width) + col] = value;
        }
    }

    /// Returns row `y`, or [`None`] past the last row
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[u8]> {
        if y < self.height {
            let start_index = usize::from(y) * usize::from(self.width);
            let end_index = start_index + usize::from(self.width);
            Some(&self.pixels[start_index..end_index])
        } else {
            None
        }
    }

    /// Iterates over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(usize::from(self.width))
    }
}
