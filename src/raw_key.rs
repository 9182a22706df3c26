//! Raw-key tokens: reproduce a cipher tripcode without the original secret.
//!
//! Token layout:
//!
//! ```text
//! ##  D6C5B4A392817060  Xy
//! ^^  ^^^^^^^^^^^^^^^^  ^^
//! |   16 hex (digest)   salt, trailing periods stripped
//! |
//! first `#` is the name-field separator; the key a later derivation
//! receives is the token minus that leading `#`
//! ```
//!
//! The digest is the key's first 8 bytes (zero-padded), so replaying the
//! token reconstructs exactly the bytes `crypt(3)` saw the first time, and
//! the stored salt is reused verbatim, never re-derived.

use thiserror::Error;

use crate::cipher;

/// Parse failure for a `#`-addressed key.
///
/// The public [`crate::tripcode`] entry flattens all of these to the `"???"`
/// sentinel; the typed form is for callers driving [`RawKey`] directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RawKeyError {
    #[error("raw key must start with `#`")]
    Marker,

    #[error("raw key must be 17-19 bytes (`#` + 16 hex + 0-2 salt), got {0}")]
    Length(usize),

    #[error("digest contains a non-hex character")]
    Digest,

    #[error("salt suffix contains a character outside [./0-9A-Za-z]")]
    Salt,
}

fn is_salt_char(byte: u8) -> bool {
    matches!(byte, b'.' | b'/' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

/// A parsed raw key: everything needed to replay a cipher tripcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKey {
    /// First 8 key bytes, zero-padded.
    pub digest: [u8; 8],
    /// Stored crypt salt, period-padded to 2 bytes.
    pub salt: [u8; 2],
}

impl RawKey {
    /// Parse a `#`-addressed key of the shape `#` + 16 hex + 0-2 salt chars.
    ///
    /// # Example
    ///
    /// ```
    /// use tripcode::RawKey;
    ///
    /// let raw = RawKey::parse(b"#0123456789abcdefH").unwrap();
    /// assert_eq!(raw.token(), "##0123456789ABCDEFH");
    /// ```
    pub fn parse(key: &[u8]) -> Result<Self, RawKeyError> {
        if key.first() != Some(&b'#') {
            return Err(RawKeyError::Marker);
        }
        if !(17..=19).contains(&key.len()) {
            return Err(RawKeyError::Length(key.len()));
        }

        let mut digest = [0u8; 8];
        hex::decode_to_slice(&key[1..17], &mut digest).map_err(|_| RawKeyError::Digest)?;

        let mut salt = [b'.'; 2];
        for (slot, &byte) in salt.iter_mut().zip(&key[17..]) {
            if !is_salt_char(byte) {
                return Err(RawKeyError::Salt);
            }
            *slot = byte;
        }

        Ok(Self { digest, salt })
    }

    /// Build the raw key for fresh key material and its derived salt.
    pub fn from_key(key: &[u8], salt: [u8; 2]) -> Self {
        let mut digest = [0u8; 8];
        for (slot, &byte) in digest.iter_mut().zip(key) {
            *slot = byte;
        }
        Self { digest, salt }
    }

    /// Render the shareable token: `##` + uppercase digest + salt with
    /// trailing periods stripped.
    pub fn token(&self) -> String {
        let end = self
            .salt
            .iter()
            .rposition(|&b| b != b'.')
            .map_or(0, |i| i + 1);
        let salt = std::str::from_utf8(&self.salt[..end]).expect("salt bytes are ASCII");
        format!("##{}{}", hex::encode_upper(self.digest), salt)
    }

    /// Replay the tripcode. The token re-emitted for `append_raw_key` is
    /// byte-identical to the one this key was parsed from.
    pub fn generate(&self, append_raw_key: bool) -> String {
        let code = cipher::crypt10(&self.digest, self.salt);
        if append_raw_key {
            format!("{} {}", code, self.token())
        } else {
            code
        }
    }
}
