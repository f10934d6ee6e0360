use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libwad` errors
pub enum Error {
    /// Error returned on short reads or failed seeks
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    /// Error returned if an offset stored in the archive points outside of the
    /// addressable range
    #[error("invalid offset {offset} (base {base})")]
    InvalidOffset {
        /// position the offset is relative to
        base: i64,
        /// offset read from the archive
        offset: i64,
    },
    /// Error returned if no directory entry carries the requested name
    #[error("lump `{name}` not found")]
    LumpNotFound {
        /// requested lump name
        name: String,
    },
    /// Error returned if a requested lump name cannot fit an 8-byte name field
    #[error("invalid lump name `{name}`: names are 1 to 8 bytes without embedded NULs")]
    InvalidLumpName {
        /// requested lump name
        name: String,
    },
    /// Error returned if a patch header declares a non-positive width or height
    #[error("invalid patch dimensions {width}x{height}")]
    InvalidDimensions {
        /// declared width
        width: i16,
        /// declared height
        height: i16,
    },
    /// Error returned if width * height of a patch cannot be allocated
    #[error("patch dimensions {width}x{height} overflow")]
    DimensionOverflow {
        /// declared width
        width: i16,
        /// declared height
        height: i16,
    },
    /// Error returned if a palette buffer holds fewer than 256 colors
    #[error("palette needs 768 bytes, got {len}")]
    InvalidPalette {
        /// length of the provided buffer
        len: usize,
    },
    /// Error returned if the output path has no supported image extension
    #[error("unsupported output format for `{path}`")]
    UnsupportedFormat {
        /// output path
        path: String,
    },
    /// Error returned if the RGB buffer does not match the image dimensions
    #[error("rgb buffer has {len} bytes, expected {expected}")]
    MismatchWidthHeight {
        /// expected buffer length (width * height * 3)
        expected: usize,
        /// actual buffer length
        len: usize,
    },
    /// Error returned by the image encoder
    #[error("image encode error")]
    Encode(#[from] image::ImageError),
}

/// Result type used throughout `libwad`
pub type Result<T, E = Error> = std::result::Result<T, E>;
