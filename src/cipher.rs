//! Classic 10-character tripcode via DES `crypt(3)`.
//!
//! The code is the last 10 characters of `crypt(key, salt)`, with the key
//! truncated at its first NUL the way the C implementations read it. The
//! crypt primitive itself comes from `pwhash`; replacing it with anything
//! stronger breaks compatibility with every other implementation.

use pwhash::unix_crypt;

use crate::raw_key::RawKey;
use crate::salt;

/// Crypt a key with a salt already folded onto `[./0-9A-Za-z]` and keep the
/// last 10 characters.
pub fn crypt10(key: &[u8], salt: [u8; 2]) -> String {
    let key = match key.iter().position(|&b| b == 0) {
        Some(nul) => &key[..nul],
        None => key,
    };

    let salt = std::str::from_utf8(&salt).expect("salt bytes are ASCII");
    let hashed = unix_crypt::hash_with(salt, key).expect("salt is within the crypt alphabet");
    hashed[hashed.len() - 10..].to_string()
}

/// Generate the cipher-variant tripcode for a normalized key.
///
/// With `append_raw_key`, the code is followed by `" "` and a token that
/// replays it later without the secret ([`RawKey`]).
pub fn generate(key: &[u8], append_raw_key: bool) -> String {
    let salt = salt::derive(key);
    let code = crypt10(key, salt);

    if append_raw_key {
        format!("{} {}", code, RawKey::from_key(key, salt).token())
    } else {
        code
    }
}
