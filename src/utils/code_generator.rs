//! Short code derivation.
//!
//! A short code is a pure function of the URL bytes: SHA-256 the input, keep
//! the first [`CODE_HASH_BYTES`] bytes of the digest and encode them as
//! URL-safe base64 without padding. Six bytes always encode to exactly
//! [`CODE_LENGTH`] characters.
//!
//! Only 48 bits of the digest are kept, so distinct URLs can collide. The
//! store overwrites on collision; nothing here tries to detect it.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept before encoding.
pub const CODE_HASH_BYTES: usize = 6;

/// Length of every generated code.
pub const CODE_LENGTH: usize = 8;

/// Derives the short code for `url`.
///
/// The same bytes always produce the same code, so re-shortening a URL is
/// idempotent without a lookup.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(generate_code(b"https://practicum.yandex.ru/"), "QrPnX5IU");
/// ```
pub fn generate_code(url: &[u8]) -> String {
    let digest = Sha256::digest(url);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..CODE_HASH_BYTES])
}
