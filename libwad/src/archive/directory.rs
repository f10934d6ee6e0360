use std::io::{Read, Seek, SeekFrom};

use bon::Builder;
use tracing::{debug, trace};

use super::{absolute, name::LumpName, read_array};
use crate::Result;

/// Size in bytes of one directory entry on disk
pub const ENTRY_SIZE: i64 = 16;

/// Raw directory entry: where a lump lives and what it is called
///
/// ## Note
///
/// Offset and size are stored as read. A negative value is not rejected here; it only becomes an
/// error when something seeks to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct DirectoryEntry {
    /// Byte offset of the lump from the start of the archive
    pub offset: i32,
    /// Size of the lump in bytes
    pub size: i32,
    /// Fixed-width lump name
    pub name: LumpName,
}

impl DirectoryEntry {
    /// Seeks to `position` and reads one entry
    ///
    /// # Errors
    ///
    /// This function errors on a failed seek or if fewer than 16 bytes can be read
    pub fn read_at(r: &mut (impl Read + Seek), position: u64) -> Result<Self> {
        r.seek(SeekFrom::Start(position))?;
        let offset = i32::from_le_bytes(read_array(r)?);
        let size = i32::from_le_bytes(read_array(r)?);
        let name = LumpName::from_raw(read_array(r)?);
        Ok(Self { offset, size, name })
    }
}

fn entry_position(directory_offset: i32, index: i32) -> Result<u64> {
    absolute(
        i64::from(directory_offset),
        i64::from(index) * ENTRY_SIZE,
    )
}

/// Scans the directory in order and returns the first entry named `name`
///
/// Returns `Ok(None)` if no entry matches. A non-positive `num_lumps` scans nothing.
///
/// # Errors
///
/// This function errors if an entry position is negative or an entry cannot be read
pub fn find_lump(
    r: &mut (impl Read + Seek),
    num_lumps: i32,
    directory_offset: i32,
    name: &LumpName,
) -> Result<Option<DirectoryEntry>> {
    for i in 0..num_lumps.max(0) {
        let entry = DirectoryEntry::read_at(r, entry_position(directory_offset, i)?)?;
        trace!("entry {i}: {} at {}", entry.name, entry.offset);
        if entry.name == *name {
            debug!(
                "Found lump {name} at index {i}: offset {}, size {}",
                entry.offset, entry.size
            );
            return Ok(Some(entry));
        }
    }
    debug!("Lump {name} not found in {num_lumps} entries");
    Ok(None)
}

/// Reads every directory entry, in order
///
/// # Errors
///
/// This function errors if an entry position is negative or an entry cannot be read
pub fn read_directory(
    r: &mut (impl Read + Seek),
    num_lumps: i32,
    directory_offset: i32,
) -> Result<Vec<DirectoryEntry>> {
    (0..num_lumps.max(0))
        .map(|i| DirectoryEntry::read_at(r, entry_position(directory_offset, i)?))
        .collect()
}
