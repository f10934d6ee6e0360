use std::io::Read;

use bon::Builder;

use crate::{archive::read_array, Result};

/// Raw patch header
///
/// ## Note
///
/// Values are stored as read. Width and height are only checked when the pixel grid is
/// allocated, see [`crate::IndexedPixelGrid::zeroed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct PatchHeader {
    /// Width in pixels, also the number of column offsets that follow the header
    pub width: i16,
    /// Height in pixels
    pub height: i16,
    /// Horizontal drawing offset, not used when decoding
    #[builder(default)]
    pub left_offset: i16,
    /// Vertical drawing offset, not used when decoding
    #[builder(default)]
    pub top_offset: i16,
}

impl PatchHeader {
    /// Reads the 8-byte header at the current position
    ///
    /// # Errors
    ///
    /// This function errors on a short read
    pub fn read(r: &mut impl Read) -> Result<Self> {
        let [w0, w1, h0, h1, l0, l1, t0, t1] = read_array(r)?;
        Ok(Self {
            width: i16::from_le_bytes([w0, w1]),
            height: i16::from_le_bytes([h0, h1]),
            left_offset: i16::from_le_bytes([l0, l1]),
            top_offset: i16::from_le_bytes([t0, t1]),
        })
    }
}
