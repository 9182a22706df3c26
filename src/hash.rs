//! SHA-1 tripcode variants: the 15-character `$` form and the 12-character
//! fallback.
//!
//! Both are slices of `base64(sha1(key))` with a first-occurrence character
//! substitution for symbols some rendering contexts reject. The 15-character
//! form additionally re-renders as half-width katakana when the secret was
//! typed with one: Shift_JIS half-width kana occupy the single-byte range
//! `0xA1..=0xDF`, and the remap lifts digits, upper case and lower case onto
//! that band before decoding the bytes back through Shift_JIS.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use encoding_rs::SHIFT_JIS;
use sha1::{Digest, Sha1};

/// Shift_JIS single-byte half-width katakana range.
const KANA_RANGE: std::ops::RangeInclusive<u8> = 0xA1..=0xDF;

fn is_half_width_kana_key(key: &[u8]) -> bool {
    key.len() >= 2 && key[0] == b'$' && KANA_RANGE.contains(&key[1])
}

/// Lift one tripcode character onto the half-width kana byte band.
fn kana_byte(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte + 0x71,
        b'A'..=b'Z' => byte + 0x6A,
        b'a'..=b'z' => byte + 0x64,
        b'.' => 0xDF,
        _ => byte,
    }
}

/// Remap a computed tripcode to half-width katakana.
fn to_half_width_kana(code: &str) -> String {
    let bytes: Vec<u8> = code.bytes().map(kana_byte).collect();
    let (decoded, _, _) = SHIFT_JIS.decode(&bytes);
    decoded.into_owned()
}

/// 15-character tripcode for `$`-prefixed keys.
///
/// `base64(sha1(key))` characters 3..18, first `+` → `.`, first `/` → `!`.
/// A half-width kana byte right after the `$` switches the output to the
/// kana rendering.
pub fn fifteen(key: &[u8]) -> String {
    let encoded = STANDARD.encode(Sha1::digest(key));
    let code = encoded[3..18].replacen('+', ".", 1).replacen('/', "!", 1);

    if is_half_width_kana_key(key) {
        to_half_width_kana(&code)
    } else {
        code
    }
}

/// 12-character fallback tripcode.
///
/// `base64(sha1(key))` characters 0..12, first `+` → `.`. No salt, no
/// raw-key option.
pub fn twelve(key: &[u8]) -> String {
    let encoded = STANDARD.encode(Sha1::digest(key));
    encoded[..12].replacen('+', ".", 1)
}
