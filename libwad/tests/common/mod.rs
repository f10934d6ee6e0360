#![allow(dead_code)]

/// One post: rows to skip from the running row cursor, then the pixel indexes
pub type Post = (u8, Vec<u8>);

/// Builds a patch lump whose columns hold `columns[c]` posts, each column closed by `0xFF`
pub fn patch_bytes(width: i16, height: i16, columns: &[Vec<Post>]) -> Vec<u8> {
    let mut data = Vec::new();
    let mut offsets = Vec::new();
    let table_end = 8 + 4 * columns.len();
    for posts in columns {
        offsets.push(i32::try_from(table_end + data.len()).unwrap());
        for (topdelta, pixels) in posts {
            data.push(*topdelta);
            data.push(u8::try_from(pixels.len()).unwrap());
            data.extend(pixels);
            // pad byte
            data.push(0);
        }
        data.push(0xFF);
    }

    let mut patch = Vec::new();
    patch.extend(width.to_le_bytes());
    patch.extend(height.to_le_bytes());
    patch.extend(0i16.to_le_bytes());
    patch.extend(0i16.to_le_bytes());
    for offset in offsets {
        patch.extend(offset.to_le_bytes());
    }
    patch.extend(data);
    patch
}

/// Builds an archive: 12-byte header, the lumps in order, then the directory
pub fn wad_bytes(tag: &[u8; 4], lumps: &[([u8; 8], Vec<u8>)]) -> Vec<u8> {
    let lump_data_len: usize = lumps.iter().map(|(_, data)| data.len()).sum();
    let directory_offset = i32::try_from(12 + lump_data_len).unwrap();

    let mut wad = Vec::new();
    wad.extend(tag);
    wad.extend(i32::try_from(lumps.len()).unwrap().to_le_bytes());
    wad.extend(directory_offset.to_le_bytes());

    let mut entries = Vec::new();
    for (name, data) in lumps {
        entries.extend(i32::try_from(wad.len()).unwrap().to_le_bytes());
        entries.extend(i32::try_from(data.len()).unwrap().to_le_bytes());
        entries.extend(name);
        wad.extend(data);
    }
    wad.extend(entries);
    wad
}

/// Pads `name` with NULs to the 8-byte field width
pub fn name(name: &str) -> [u8; 8] {
    let mut field = [0; 8];
    field[..name.len()].copy_from_slice(name.as_bytes());
    field
}

/// The 2x2 `SKY1` patch: column 0 holds indexes 1, 2 and column 1 holds 3, 4
pub fn sky1_patch() -> Vec<u8> {
    patch_bytes(2, 2, &[vec![(0, vec![1, 2])], vec![(0, vec![3, 4])]])
}

/// A `PWAD` holding only the 2x2 `SKY1` patch
pub fn sky1_wad() -> Vec<u8> {
    wad_bytes(b"PWAD", &[(name("SKY1"), sky1_patch())])
}
