#![allow(clippy::module_name_repetitions)]

pub(crate) mod directory;
pub(crate) mod header;
pub(crate) mod name;

pub use directory::{find_lump, read_directory, DirectoryEntry, ENTRY_SIZE};
pub use header::{ArchiveHeader, WadKind};
pub use name::{LumpName, NAME_LEN};

use crate::{palette::Palette, patch::Patch, Error, Result};
use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::{debug, info};

/// Name of the lump holding the game palettes
pub const PLAYPAL: &str = "PLAYPAL";

/// An open WAD archive
///
/// Holds the reader and the header read from it. Every read seeks first, so the reader position
/// is never relied upon between calls.
#[derive(Debug)]
pub struct Wad<R> {
    reader: R,
    header: ArchiveHeader,
}

impl Wad<BufReader<File>> {
    /// Opens the archive at the provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or its header cannot be read.
    /// See [`Self::from_reader`]
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Wad<R> {
    /// Reads the archive header from `reader`
    ///
    /// # Errors
    ///
    /// This function errors if the header is truncated
    pub fn from_reader(mut reader: R) -> Result<Self> {
        let header = ArchiveHeader::read(&mut reader)?;
        if header.kind().is_none() {
            debug!("Unknown archive tag {:?}, reading anyway", header.tag_lossy());
        }
        Ok(Self { reader, header })
    }

    /// Returns a reference to the [`ArchiveHeader`]
    #[must_use]
    pub const fn header(&self) -> &ArchiveHeader {
        &self.header
    }

    /// Reads the whole directory, in order
    ///
    /// # Errors
    ///
    /// See [`read_directory`]
    pub fn entries(&mut self) -> Result<Vec<DirectoryEntry>> {
        read_directory(
            &mut self.reader,
            self.header.num_lumps,
            self.header.directory_offset,
        )
    }

    /// Looks up the first entry named `name`, returning `Ok(None)` if there is none
    ///
    /// # Errors
    ///
    /// This function errors if `name` is not a valid lump name or the directory cannot be read
    pub fn find_lump(&mut self, name: &str) -> Result<Option<DirectoryEntry>> {
        let name = LumpName::new(name)?;
        find_lump(
            &mut self.reader,
            self.header.num_lumps,
            self.header.directory_offset,
            &name,
        )
    }

    /// Looks up the first entry named `name`
    ///
    /// # Errors
    ///
    /// Returns [`Error::LumpNotFound`] if no entry matches, otherwise see [`Self::find_lump`]
    pub fn lump(&mut self, name: &str) -> Result<DirectoryEntry> {
        self.find_lump(name)?.ok_or_else(|| Error::LumpNotFound {
            name: name.to_owned(),
        })
    }

    /// Decodes the patch stored at `entry`
    ///
    /// # Errors
    ///
    /// See [`Patch::read_at`]
    pub fn read_patch(&mut self, entry: &DirectoryEntry) -> Result<Patch> {
        info!("Decoding patch {} at offset {}", entry.name, entry.offset);
        let offset = absolute(0, i64::from(entry.offset))?;
        Patch::read_at(&mut self.reader, offset)
    }

    /// Reads the first palette of the archive's `PLAYPAL` lump
    ///
    /// # Errors
    ///
    /// Returns [`Error::LumpNotFound`] if the archive has no `PLAYPAL`, or
    /// [`Error::InvalidPalette`] if the lump is too short
    pub fn palette(&mut self) -> Result<Palette> {
        let entry = self.lump(PLAYPAL)?;
        let len = usize::try_from(entry.size.max(0))
            .unwrap_or(0)
            .min(Palette::SIZE);
        self.reader
            .seek(SeekFrom::Start(absolute(0, i64::from(entry.offset))?))?;
        let mut bytes = vec![0; len];
        self.reader.read_exact(&mut bytes)?;
        Palette::from_bytes(&bytes)
    }

    /// Consumes [`Self`], returning the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Reads exactly `N` bytes
pub(crate) fn read_array<const N: usize>(r: &mut impl Read) -> io::Result<[u8; N]> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

/// Resolves `base + offset` to a seekable position
pub(crate) fn absolute(base: i64, offset: i64) -> Result<u64> {
    base.checked_add(offset)
        .and_then(|pos| u64::try_from(pos).ok())
        .ok_or(Error::InvalidOffset { base, offset })
}
