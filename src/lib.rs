//! # tripcode
//!
//! Deterministic pseudo-identity codes for anonymous-posting boards,
//! bit-compatible with the legacy 2channel algorithm family. A poster's
//! secret always derives the same short code, so continuity of identity can
//! be shown without an account and without revealing the secret.
//!
//! The secret is first normalized to Shift_JIS bytes ([`normalize()`]),
//! then routed to exactly one generator ([`classify`]):
//!
//! | Key shape (normalized bytes)    | Variant   | Output                        |
//! |---------------------------------|-----------|-------------------------------|
//! | shorter than 12 bytes           | DES crypt | 10 chars (+ optional raw key) |
//! | `#` + 16 hex + 0-2 salt chars   | raw-key   | 10 chars (replayed)           |
//! | `#` + anything else             | —         | `"???"`                       |
//! | `$`-prefixed                    | SHA-1     | 15 chars                      |
//! | anything else                   | SHA-1     | 12 chars                      |
//!
//! Correctness here means bit-exact reproduction of decades-old byte-level
//! behavior: the Shift_JIS table, the substring offsets, the remap tables.
//! The primitives are intentionally the legacy ones; swapping in stronger
//! crypto produces codes nobody else can reproduce.
//!
//! # Example
//!
//! ```
//! // Short secrets take the classic DES path: 10 characters.
//! let code = tripcode::tripcode("secret", false);
//! assert_eq!(code.len(), 10);
//!
//! // Opting in to a raw key makes the code reproducible without the secret.
//! let out = tripcode::tripcode("secret", true);
//! let (code2, token) = out.split_once(' ').unwrap();
//! assert_eq!(code, code2);
//! assert!(token.starts_with("##"));
//! ```

pub mod cipher;
pub mod hash;
pub mod normalize;
pub mod raw_key;
pub mod salt;
pub mod variant;

pub use normalize::{normalize, to_character_references};
pub use raw_key::{RawKey, RawKeyError};
pub use variant::{classify, Variant};

/// Sentinel for a key addressed as a raw-key token (`#`-prefixed at full
/// length) that does not parse as one. Not a valid tripcode.
pub const MALFORMED: &str = "???";

/// Derive the tripcode for a secret.
///
/// Carriage returns and line feeds are stripped before processing. Every
/// input maps to a defined output; there is no failure mode beyond the
/// [`MALFORMED`] sentinel.
///
/// With `append_raw_key`, the cipher and raw-key variants append
/// `" " + token`; the hash variants have no reproducibility token and
/// ignore the flag.
pub fn tripcode(secret: &str, append_raw_key: bool) -> String {
    let secret: String = secret.chars().filter(|&c| c != '\r' && c != '\n').collect();
    let key = normalize::normalize(&secret);

    match variant::classify(&key) {
        Variant::Cipher => cipher::generate(&key, append_raw_key),
        Variant::RawKey => match RawKey::parse(&key) {
            Ok(raw) => raw.generate(append_raw_key),
            Err(_) => MALFORMED.to_string(),
        },
        Variant::Hash15 => hash::fifteen(&key),
        Variant::Hash12 => hash::twelve(&key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        for secret in ["", "secret", "#0123456789ABCDEF", "$abcdefghijk", "長い鍵をここに置く"] {
            assert_eq!(tripcode(secret, false), tripcode(secret, false));
            assert_eq!(tripcode(secret, true), tripcode(secret, true));
        }
    }

    #[test]
    fn output_lengths_per_variant() {
        assert_eq!(tripcode("", false).len(), 10);
        assert_eq!(tripcode("secret", false).len(), 10);
        assert_eq!(tripcode("#0123456789ABCDEF", false).len(), 10);
        assert_eq!(tripcode("$abcdefghijk", false).len(), 15);
        assert_eq!(tripcode("averylongkeywithoutsentinel", false).len(), 12);
    }

    #[test]
    fn malformed_raw_key_yields_sentinel() {
        assert_eq!(tripcode("#not-a-real-raw-key", false), MALFORMED);
        assert_eq!(tripcode("#0123456789ABCDEFzzz", false), MALFORMED);
        assert_eq!(tripcode("#zzzzzzzzzzzzzzzz", false), MALFORMED);
    }

    #[test]
    fn well_formed_raw_key_replays_to_ten_characters() {
        assert_eq!(tripcode("#0123456789ABCDEF", false).len(), 10);
        assert_eq!(tripcode("#0123456789abcdefXy", false).len(), 10);
    }

    #[test]
    fn raw_key_round_trip_reproduces_cipher_code() {
        let out = tripcode("trip", true);
        let (code, token) = out.split_once(' ').unwrap();
        assert_eq!(token, "##7472697000000000ri");

        // The token's leading `#` is the name-field separator; the key a
        // later invocation sees starts at the second `#`.
        let replayed = tripcode(&token[1..], false);
        assert_eq!(replayed, code);

        // And replaying with the flag re-emits the identical token.
        let replayed_full = tripcode(&token[1..], true);
        assert_eq!(replayed_full, out);
    }

    #[test]
    fn newlines_are_stripped_before_derivation() {
        assert_eq!(tripcode("se\rcr\net", false), tripcode("secret", false));
    }

    #[test]
    fn append_flag_is_ignored_off_the_cipher_paths() {
        assert_eq!(
            tripcode("$abcdefghijk", true),
            tripcode("$abcdefghijk", false)
        );
        assert_eq!(
            tripcode("averylongkeywithoutsentinel", true),
            tripcode("averylongkeywithoutsentinel", false)
        );
    }

    #[test]
    fn unicode_secrets_derive_through_normalization() {
        // 4 double-byte characters → 8 key bytes → cipher variant.
        assert_eq!(tripcode("トリップ", false).len(), 10);

        // Escaped astral characters push the key onto the hash fallback.
        assert_eq!(tripcode("😀😀", false).len(), 12);
    }

    #[test]
    fn half_width_kana_secret_renders_kana_code() {
        let code = tripcode("$ｱ0123456789", false);
        assert_eq!(code.chars().count(), 15);
        assert!(code.chars().any(|c| ('\u{FF61}'..='\u{FF9F}').contains(&c)));
    }
}
