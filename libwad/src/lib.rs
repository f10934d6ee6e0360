//! # libwad
//!
//!
//! This library provides datatypes and i/o functionality for reading patch images out of
//! id-Software-style WAD archives, as used by Doom and the games built on its engine.
//!
//! It aims to provide a minimal, low-level API to build upon. WAD files in the wild are frequently
//! hand-edited or produced by ad-hoc tools, so the archive is treated as untrusted input: offsets
//! and dimensions are bounds-checked before they are used, while malformed column data is
//! tolerated the same way the engine tolerates it.
//!
//! ### Format
//!
//! A WAD archive starts with a 12-byte header (`IWAD` or `PWAD` tag, lump count, directory
//! offset). The directory is a flat table of 16-byte entries (offset, size, 8-byte name). A patch
//! lump stores its pixels column by column: each column is a sequence of vertical runs ("posts")
//! of palette indexes, so transparent regions cost nothing.
//!
//! All integers are read as little-endian.
//!
//! ### Limitations
//!
//! This library **only** reads. Writing archives, and lump types other than patches (sounds,
//! levels, flats, text), are not supported.
//!
//! ### Usage
//!
//! #### Converting a patch lump to an image
//!
//! ```rust,no_run
//! use libwad::{output::OutputFormat, Palette, Wad};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut wad = Wad::open("doom1.wad")?;
//!     let entry = wad.lump("SKY1")?;
//!     let patch = wad.read_patch(&entry)?;
//!
//!     let rgb = Palette::DOOM.apply(patch.pixels());
//!     libwad::output::write_rgb(
//!         "sky1.jpeg",
//!         patch.width(),
//!         patch.height(),
//!         &rgb,
//!         OutputFormat::Jpeg,
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! #### Looking up a lump without failing
//!
//! [`Wad::find_lump`] returns `Ok(None)` for absent names, so a caller can keep searching:
//!
//! ```rust,no_run
//! use libwad::Wad;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut wad = Wad::open("doom1.wad")?;
//!     let sky = ["SKY1", "SKY2", "SKY3"]
//!         .into_iter()
//!         .find_map(|name| wad.find_lump(name).transpose())
//!         .transpose()?;
//!     println!("{sky:?}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the archive header and directory types
pub mod archive;
mod error;
/// Output helpers wrapping the [`image`] encoders
pub mod output;
/// Module containing the fixed color tables and the index to RGB mapping
pub mod palette;
/// Module containing the patch decoder
pub mod patch;

pub use archive::{ArchiveHeader, DirectoryEntry, LumpName, Wad, WadKind};
pub use error::{Error, Result};
pub use palette::Palette;
pub use patch::{IndexedPixelGrid, Patch, PatchHeader};

/// Lump name used by the engine for the first episode sky texture
pub const DEFAULT_LUMP: &str = "SKY1";
