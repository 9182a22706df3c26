//! Salt derivation for the DES-crypt variants.
//!
//! `crypt(3)` only accepts salts drawn from `[./0-9A-Za-z]`. The legacy rule
//! takes two key bytes and folds them onto that alphabet:
//!
//! | Byte value        | Maps to     |
//! |-------------------|-------------|
//! | `< 0x2E`, `> 0x7A`| `.`         |
//! | `0x3A..=0x40`     | `+0x07`     |
//! | `0x5B..=0x60`     | `+0x06`     |
//! | otherwise         | unchanged   |
//!
//! The two shifts move the ASCII punctuation gaps onto the nearest letters,
//! matching the reference implementation bit for bit.

/// Constant suffix appended before the salt bytes are picked.
pub const SALT_SUFFIX: [u8; 2] = *b"H.";

/// Fold one byte onto the crypt salt alphabet.
fn fold(byte: u8) -> u8 {
    match byte {
        0x3A..=0x40 => byte + 0x07,
        0x5B..=0x60 => byte + 0x06,
        0x2E..=0x7A => byte,
        _ => b'.',
    }
}

/// Derive the 2-byte salt for a key.
///
/// The salt is bytes 1 and 2 of `key ++ "H."`. An empty key gets the suffix
/// itself, `"H."`.
pub fn derive(key: &[u8]) -> [u8; 2] {
    if key.is_empty() {
        return SALT_SUFFIX;
    }

    // key is non-empty, so offsets 1 and 2 always land inside key ++ "H.".
    let extended = |i: usize| {
        if i < key.len() {
            key[i]
        } else {
            SALT_SUFFIX[i - key.len()]
        }
    };
    [fold(extended(1)), fold(extended(2))]
}
