//! Finished SHA-1 digest value.

use std::fmt;
use std::str::FromStr;

use super::{DIGEST_LEN, Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A 20-byte SHA-1 digest.
///
/// Formats as 40 lowercase hex characters, byte 0 first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Construct from a fixed-size array.
    #[must_use]
    pub const fn from_array(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice of exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidDigestLength { len: bytes.len() })?;
        Ok(Self(array))
    }

    /// Parse 40 hex characters (either case).
    pub fn from_hex(text: &str) -> Result<Self> {
        let raw = text.as_bytes();
        if raw.len() != DIGEST_LEN * 2 {
            return Err(Error::InvalidDigestLength { len: raw.len() });
        }

        let mut out = [0u8; DIGEST_LEN];
        for (i, byte) in out.iter_mut().enumerate() {
            let hi = nibble(raw[2 * i]).ok_or(Error::InvalidHex { position: 2 * i })?;
            let lo = nibble(raw[2 * i + 1]).ok_or(Error::InvalidHex {
                position: 2 * i + 1,
            })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(out))
    }

    /// Borrow as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume into the raw array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex text.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_LEN * 2);
        for byte in self.0 {
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
        }
        out
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
