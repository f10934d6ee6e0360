use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use tracing::{debug, trace, warn};

use super::{grid::IndexedPixelGrid, header::PatchHeader, Patch};
use crate::{archive::read_array, Result};

/// `topdelta` value marking the end of a column
pub const END_OF_COLUMN: u8 = 0xFF;

/// Header of one vertical run of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Post {
    /// rows to skip from the current row cursor
    topdelta: u8,
    /// number of pixel bytes that follow
    length: u8,
}

/// Reads the next post header, [`None`] at the end of the data
fn read_post(r: &mut impl Read) -> io::Result<Option<Post>> {
    match read_array::<2>(r) {
        Ok([topdelta, length]) => Ok(Some(Post { topdelta, length })),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Seeks to `patch_offset` and decodes the patch stored there
///
/// # Errors
///
/// This function errors if the header or column offset table cannot be read, or if the header
/// declares dimensions that cannot be allocated. Malformed column data is not an error: a column
/// stops decoding at its first inconsistency and keeps what was written so far.
pub fn decode_patch(r: &mut (impl Read + Seek), patch_offset: u64) -> Result<Patch> {
    r.seek(SeekFrom::Start(patch_offset))?;
    let header = PatchHeader::read(r)?;
    debug!("Patch header: {header:?}");

    let mut grid = IndexedPixelGrid::zeroed(header.width, header.height)?;

    let mut offsets = vec![0; usize::from(grid.width()) * 4];
    r.read_exact(&mut offsets)?;
    let column_offsets: Vec<i32> = offsets
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    for (col, &offset) in column_offsets.iter().enumerate() {
        let Some(position) = patch_offset.checked_add_signed(i64::from(offset)) else {
            warn!("Column {col} offset {offset} points before the archive start, leaving it empty");
            continue;
        };
        r.seek(SeekFrom::Start(position))?;
        decode_column(r, &mut grid, col)?;
    }

    Ok(Patch { header, grid })
}

/// Decodes the posts of column `col`, starting at the current position
fn decode_column(
    r: &mut (impl Read + Seek),
    grid: &mut IndexedPixelGrid,
    col: usize,
) -> io::Result<()> {
    let height = usize::from(grid.height());
    let mut row = 0usize;
    let mut pixels = Vec::with_capacity(usize::from(u8::MAX));

    while row < height {
        let Some(post) = read_post(r)? else {
            trace!("Column {col}: data ends without an end marker");
            break;
        };
        if post.topdelta == END_OF_COLUMN {
            break;
        }

        // topdelta is relative to the running row, so tall patches can stack posts
        row += usize::from(post.topdelta);
        let length = usize::from(post.length);
        if row + length > height {
            warn!(
                "Column {col}: post of {length} pixels at row {row} overflows height {height}, skipping"
            );
            break;
        }
        trace!("Column {col}: post at row {row}, {length} pixels");

        pixels.clear();
        r.by_ref()
            .take(u64::from(post.length))
            .read_to_end(&mut pixels)?;
        for &index in &pixels {
            grid.set(row, col, index);
            row += 1;
        }
        if pixels.len() < length {
            warn!(
                "Column {col}: post truncated after {} of {length} pixels",
                pixels.len()
            );
            break;
        }

        // unused pad byte after each post
        r.seek(SeekFrom::Current(1))?;
    }
    Ok(())
}
