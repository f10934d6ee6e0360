#![allow(clippy::module_name_repetitions)]

pub(crate) mod decode;
pub(crate) mod grid;
pub(crate) mod header;

pub use decode::{decode_patch, END_OF_COLUMN};
pub use grid::IndexedPixelGrid;
pub use header::PatchHeader;

use crate::Result;
use std::io::{Read, Seek};

/// A decoded patch lump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    header: PatchHeader,
    grid: IndexedPixelGrid,
}

impl Patch {
    /// Decodes the patch starting at absolute position `patch_offset`
    ///
    /// # Errors
    ///
    /// See [`decode_patch`]
    pub fn read_at(r: &mut (impl Read + Seek), patch_offset: u64) -> Result<Self> {
        decode_patch(r, patch_offset)
    }

    /// Returns a reference to the [`PatchHeader`]
    #[must_use]
    pub const fn header(&self) -> &PatchHeader {
        &self.header
    }

    /// Returns the decoded pixel indexes
    #[must_use]
    pub const fn pixels(&self) -> &IndexedPixelGrid {
        &self.grid
    }

    /// Consumes [`Self`], returning the pixel indexes
    #[must_use]
    pub fn into_pixels(self) -> IndexedPixelGrid {
        self.grid
    }

    /// Returns the image width
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the image height
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }
}
