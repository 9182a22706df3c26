//! Legacy text normalization: Unicode secret → Shift_JIS key bytes.
//!
//! The legacy algorithm family operates on Shift_JIS bytes, not Unicode.
//! Characters Shift_JIS cannot represent are replaced with decimal numeric
//! character references (`&#<codepoint>;`) before encoding, so every input
//! has a defined byte form.
//!
//! One corner case drives the escaping rule: the legacy converters conflate
//! undefined byte slots with the interpunct `・`. Any character that is not
//! `・` but would encode to the interpunct's bytes must be escaped too, or
//! distinct secrets would collide on the same key. The interpunct's byte
//! form is asked of the converter at runtime, not hardcoded: conversion
//! tables vary between implementations, and the guard has to track the
//! table in use.

use encoding_rs::SHIFT_JIS;

/// The interpunct (katakana middle dot), Shift_JIS's ambiguity slot.
pub const INTERPUNCT: char = '・';

/// Encode a single character, reporting whether it was unmappable.
fn sjis_bytes(c: char) -> (Vec<u8>, bool) {
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = SHIFT_JIS.encode(c.encode_utf8(&mut buf));
    (bytes.into_owned(), unmappable)
}

/// Replace every character Shift_JIS cannot faithfully represent with a
/// decimal numeric character reference.
///
/// Characters outside the BMP are never representable and always escape.
/// The output is still Unicode; [`normalize`] turns it into key bytes.
///
/// # Example
///
/// ```
/// use tripcode::to_character_references;
///
/// assert_eq!(to_character_references("abc"), "abc");
/// assert_eq!(to_character_references("😀"), "&#128512;");
/// ```
pub fn to_character_references(input: &str) -> String {
    let (interpunct, _) = sjis_bytes(INTERPUNCT);

    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let (bytes, unmappable) = sjis_bytes(c);
        if c != INTERPUNCT && (unmappable || bytes == interpunct) {
            out.push_str(&format!("&#{};", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalize a secret into its Shift_JIS key bytes.
///
/// The byte length of the result drives variant selection
/// ([`crate::classify`]).
pub fn normalize(secret: &str) -> Vec<u8> {
    let escaped = to_character_references(secret);
    let (bytes, _, _) = SHIFT_JIS.encode(&escaped);
    bytes.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_character_references("plain ascii 123"), "plain ascii 123");
        assert_eq!(normalize("abc"), b"abc");
    }

    #[test]
    fn double_byte_kana_encodes() {
        // あ is 0x82 0xA0 in Shift_JIS
        assert_eq!(normalize("あ"), vec![0x82, 0xA0]);
    }

    #[test]
    fn interpunct_itself_is_kept() {
        assert_eq!(to_character_references("・"), "・");
        assert_eq!(normalize("・"), vec![0x81, 0x45]);
    }

    #[test]
    fn astral_characters_escape() {
        assert_eq!(to_character_references("😀"), "&#128512;");
        assert_eq!(normalize("😀"), b"&#128512;");
    }

    #[test]
    fn escaped_form_is_pure_ascii() {
        let key = normalize("a😀b");
        assert!(key.iter().all(u8::is_ascii));
        assert_eq!(key, b"a&#128512;b");
    }
}
