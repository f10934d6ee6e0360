use std::fmt::Display;

use crate::{Error, Result};

/// Width of the name field of a directory entry
pub const NAME_LEN: usize = 8;

/// A fixed-width, 8-byte lump name
///
/// Name fields are space- or NUL-padded and are not NUL-terminated when the name is exactly 8
/// bytes long. Two names are equal when their canonical forms are equal: the field is cut at its
/// first NUL, trailing spaces are dropped, and the rest is zero-padded back to 8 bytes. All 8 bytes
/// are then compared, case-sensitively.
///
/// This means a shorter name never matches a longer one sharing its prefix (`SKY` does not match
/// `SKY1`), and an unterminated 8-byte field matches the 8-character name it spells.
#[derive(Debug, Clone, Copy)]
pub struct LumpName {
    raw: [u8; NAME_LEN],
}

impl LumpName {
    /// Creates a name suitable for lookups
    ///
    /// # Errors
    ///
    /// Errors if `name` is empty, longer than 8 bytes, or contains a NUL byte
    pub fn new(name: &str) -> Result<Self> {
        let bytes = name.as_bytes();
        if bytes.is_empty() || bytes.len() > NAME_LEN || bytes.contains(&0) {
            return Err(Error::InvalidLumpName {
                name: name.to_owned(),
            });
        }
        let mut raw = [0; NAME_LEN];
        raw[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { raw })
    }

    /// Wraps a name field exactly as stored in a directory entry
    #[must_use]
    pub const fn from_raw(raw: [u8; NAME_LEN]) -> Self {
        Self { raw }
    }

    /// Returns the bytes as stored
    #[must_use]
    pub const fn raw(&self) -> [u8; NAME_LEN] {
        self.raw
    }

    /// Returns the canonical, zero-padded form used for comparisons
    #[must_use]
    pub fn canonical(&self) -> [u8; NAME_LEN] {
        let end = self.raw.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let end = self.raw[..end]
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |i| i + 1);
        let mut out = [0; NAME_LEN];
        out[..end].copy_from_slice(&self.raw[..end]);
        out
    }

    /// Returns the name as text, without padding
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        let canonical = self.canonical();
        let len = canonical.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        String::from_utf8_lossy(&canonical[..len]).into_owned()
    }
}

impl PartialEq for LumpName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for LumpName {}

impl Display for LumpName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl TryFrom<&str> for LumpName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
