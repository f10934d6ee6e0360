use std::{
    io::{Read, Seek, Write},
    path::Path,
};

use anyhow::{Context, Result};
use libwad::{
    output::{write_rgb, OutputFormat},
    Palette, Wad,
};
use tracing::{debug, info, instrument};

/// Where the palette used for the conversion comes from
#[derive(Debug, Clone, Default)]
pub enum PaletteSource {
    /// The built-in Doom palette
    #[default]
    Builtin,
    /// The `PLAYPAL` lump of the archive being read
    Archive,
    /// A raw palette file (768 bytes, or a whole `PLAYPAL` dump)
    File(std::path::PathBuf),
}

/// Dimensions of an extracted patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted {
    /// Patch width in pixels
    pub width: u16,
    /// Patch height in pixels
    pub height: u16,
}

fn load_palette<R: Read + Seek>(wad: &mut Wad<R>, source: &PaletteSource) -> Result<Palette> {
    let palette = match source {
        PaletteSource::Builtin => Palette::DOOM,
        PaletteSource::Archive => wad.palette().context("Read PLAYPAL from archive")?,
        PaletteSource::File(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Read palette file {}", path.display()))?;
            Palette::from_bytes(&bytes)?
        }
    };
    debug!("Using palette from {source:?}");
    Ok(palette)
}

/// Decodes lump `lump_name` of `wad` and writes it to `output_name`
///
/// # Errors
///
/// Errors if the lump is missing, cannot be decoded, or the image cannot be written
#[instrument(skip(wad))]
pub fn extract_patch<R: Read + Seek>(
    wad: &mut Wad<R>,
    lump_name: &str,
    palette: &PaletteSource,
    output_name: &Path,
) -> Result<Extracted> {
    let format = OutputFormat::from_path(output_name)?;
    let palette = load_palette(wad, palette)?;

    let entry = wad.lump(lump_name)?;
    let patch = wad
        .read_patch(&entry)
        .with_context(|| format!("Decode patch {lump_name}"))?;
    let (width, height) = (patch.width(), patch.height());
    debug!("Decoded {lump_name}: {width}x{height}");

    let rgb = palette.apply(patch.pixels());
    drop(patch);
    debug!("Length of RGB patch data: {}", rgb.len());

    info!("Writing {lump_name} to {}", output_name.display());
    write_rgb(output_name, width, height, &rgb, format)
        .with_context(|| format!("Write image {}", output_name.display()))?;
    Ok(Extracted { width, height })
}

/// Opens the archive at `wad_file` and extracts lump `lump_name` into `output_name`
///
/// # Errors
///
/// See [`extract_patch`]; also errors if the archive cannot be opened
#[instrument]
pub fn patch_to_image(
    wad_file: &Path,
    lump_name: &str,
    palette: &PaletteSource,
    output_name: &Path,
) -> Result<Extracted> {
    let mut wad = Wad::open(wad_file)
        .with_context(|| format!("Open WAD file {}", wad_file.display()))?;
    debug!("Read header from file: {:?}", wad.header());
    extract_patch(&mut wad, lump_name, palette, output_name)
}

/// Writes one line per directory entry of `wad_file`: index, name, offset and size
///
/// # Errors
///
/// Errors if the archive cannot be opened or its directory cannot be read
pub fn list_lumps(wad_file: &Path, mut out: impl Write) -> Result<()> {
    let mut wad = Wad::open(wad_file)
        .with_context(|| format!("Open WAD file {}", wad_file.display()))?;
    let header = *wad.header();
    writeln!(
        out,
        "{} with {} lumps, directory at {}",
        header.tag_lossy(),
        header.num_lumps,
        header.directory_offset
    )?;
    for (i, entry) in wad.entries()?.iter().enumerate() {
        writeln!(
            out,
            "{i:>5} {:<8} {:>10} {:>10}",
            entry.name.to_string(),
            entry.offset,
            entry.size
        )?;
    }
    Ok(())
}

/// Default output file for `lump_name`: the lowercased name with a `jpeg` extension
#[must_use]
pub fn default_output(lump_name: &str) -> std::path::PathBuf {
    format!("{}.jpeg", lump_name.to_ascii_lowercase()).into()
}
