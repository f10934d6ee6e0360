use std::{
    fmt::Display,
    io::{Read, Seek, SeekFrom},
};

use bon::Builder;
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

use super::read_array;
use crate::Result;

/// Raw archive header
///
/// ## Note
///
/// The tag is stored as read and never validated: archives with an unknown tag are read the same
/// way as `IWAD`/`PWAD` ones. Use [`ArchiveHeader::kind`] to classify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct ArchiveHeader {
    /// 4-byte type tag, `IWAD` or `PWAD` in well-formed archives
    pub tag: [u8; 4],
    /// Number of entries in the directory
    pub num_lumps: i32,
    /// Byte offset of the directory table from the start of the archive
    pub directory_offset: i32,
}

/// The two archive kinds the engine knows about
#[derive(Debug, Eq, PartialEq, Copy, Clone, EnumString, IntoStaticStr)]
pub enum WadKind {
    /// Internal WAD, a complete game data file
    #[strum(serialize = "IWAD")]
    Iwad,
    /// Patch WAD, a mod overriding lumps of an IWAD
    #[strum(serialize = "PWAD")]
    Pwad,
}

impl ArchiveHeader {
    /// Reads the header from the start of the reader
    ///
    /// # Errors
    ///
    /// This function errors if the reader cannot be rewound or holds fewer than 12 bytes
    /// (tag, lump count, directory offset)
    pub fn read(r: &mut (impl Read + Seek)) -> Result<Self> {
        r.seek(SeekFrom::Start(0))?;
        let tag = read_array::<4>(r)?;
        let num_lumps = i32::from_le_bytes(read_array(r)?);
        let directory_offset = i32::from_le_bytes(read_array(r)?);
        let header = Self {
            tag,
            num_lumps,
            directory_offset,
        };
        debug!(
            "Read header: tag {}, {num_lumps} lumps, directory at {directory_offset}",
            header.tag_lossy()
        );
        Ok(header)
    }

    /// Classifies the tag, returning [`None`] for anything but `IWAD`/`PWAD`
    #[must_use]
    pub fn kind(&self) -> Option<WadKind> {
        std::str::from_utf8(&self.tag).ok()?.parse().ok()
    }

    /// The tag as text, with non-UTF-8 bytes replaced
    #[must_use]
    pub fn tag_lossy(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

impl Display for WadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{s}")
    }
}
