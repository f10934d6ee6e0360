use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    ExtendedColorType, ImageEncoder,
};
use strum::EnumString;
use tracing::{debug, info};

use crate::{Error, Result};

/// Quality used for JPEG output
pub const JPEG_QUALITY: u8 = 100;

/// Number of channels in the buffers handed to the encoders
pub const CHANNELS: usize = 3;

/// The compressed image formats an RGB buffer can be written as
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    /// JPEG at [`JPEG_QUALITY`]
    #[default]
    #[strum(serialize = "jpeg", serialize = "jpg")]
    Jpeg,
    /// Lossless PNG
    #[strum(serialize = "png")]
    Png,
}

impl OutputFormat {
    /// Infers the format from the extension of `path`
    ///
    /// # Errors
    ///
    /// Errors if the path has no extension or the extension is not `jpg`, `jpeg` or `png`
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| Error::UnsupportedFormat {
                path: path.display().to_string(),
            })
    }
}

/// Encodes an interleaved RGB buffer into `w`
///
/// # Errors
///
/// Errors if `rgb` is not `width * height * 3` bytes long or if the encoder fails
pub fn encode_rgb(
    w: impl Write,
    width: u16,
    height: u16,
    rgb: &[u8],
    format: OutputFormat,
) -> Result<()> {
    let expected = usize::from(width) * usize::from(height) * CHANNELS;
    if rgb.len() != expected {
        return Err(Error::MismatchWidthHeight {
            expected,
            len: rgb.len(),
        });
    }
    debug!("Encoding {width}x{height} RGB buffer as {format:?}");
    let (width, height) = (u32::from(width), u32::from(height));
    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(w, JPEG_QUALITY);
            encoder.write_image(rgb, width, height, ExtendedColorType::Rgb8)?;
        }
        OutputFormat::Png => {
            PngEncoder::new(w).write_image(rgb, width, height, ExtendedColorType::Rgb8)?;
        }
    }
    Ok(())
}

/// Writes an interleaved RGB buffer to `filename`, creating or truncating it
///
/// The image is encoded in memory first, so `filename` is only touched once encoding succeeded.
///
/// # Errors
///
/// This will error if unable to open and/or write to the provided filename, see [`encode_rgb`]
pub fn write_rgb(
    filename: impl AsRef<Path>,
    width: u16,
    height: u16,
    rgb: &[u8],
    format: OutputFormat,
) -> Result<()> {
    let filename = filename.as_ref();
    let mut encoded = Vec::new();
    encode_rgb(&mut encoded, width, height, rgb, format)?;
    let f = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(filename)?;
    let mut f = BufWriter::new(f);
    f.write_all(&encoded)?;
    f.flush()?;
    info!("Wrote {width}x{height} image to {}", filename.display());
    Ok(())
}
