mod doom;

use crate::{patch::IndexedPixelGrid, Error, Result};

/// Number of colors in a palette
pub const COLORS: usize = 256;

/// A fixed table mapping 8-bit indexes to RGB colors
///
/// The table is a plain value, so callers can pass a palette read from a `PLAYPAL` lump or a
/// small synthetic one instead of [`Palette::DOOM`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        Self::DOOM
    }
}

impl Palette {
    /// Size in bytes of one palette in a `PLAYPAL` lump
    pub const SIZE: usize = COLORS * 3;

    /// The first palette of Doom's `PLAYPAL`
    pub const DOOM: Self = Self::new(doom::DOOM_PALETTE);

    /// Creates a palette from a color table
    #[must_use]
    pub const fn new(colors: [[u8; 3]; COLORS]) -> Self {
        Self { colors }
    }

    /// Reads a palette from interleaved RGB bytes
    ///
    /// Only the first 768 bytes are used, so a whole `PLAYPAL` lump (14 palettes) can be passed
    /// as-is.
    ///
    /// # Errors
    ///
    /// Errors if `bytes` holds fewer than 768 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::InvalidPalette { len: bytes.len() });
        }
        let mut colors = [[0; 3]; COLORS];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            color.copy_from_slice(rgb);
        }
        Ok(Self { colors })
    }

    /// Returns the color for `index`; anything past the table is black
    #[must_use]
    pub fn rgb(&self, index: usize) -> [u8; 3] {
        self.colors.get(index).copied().unwrap_or([0, 0, 0])
    }

    /// Returns the whole color table
    #[must_use]
    pub const fn colors(&self) -> &[[u8; 3]; COLORS] {
        &self.colors
    }

    /// Returns an iterator over the colors of `grid`, row-major
    pub fn as_rgb_iter<'a>(
        &'a self,
        grid: &'a IndexedPixelGrid,
    ) -> impl Iterator<Item = [u8; 3]> + 'a {
        grid.pixel_indices()
            .iter()
            .map(|&index| self.rgb(usize::from(index)))
    }

    /// Maps `grid` to an interleaved RGB buffer of `width * height * 3` bytes
    #[must_use]
    pub fn apply(&self, grid: &IndexedPixelGrid) -> Vec<u8> {
        self.as_rgb_iter(grid).flatten().collect()
    }
}
