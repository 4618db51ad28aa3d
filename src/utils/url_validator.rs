//! Syntactic URL checks applied before shortening.
//!
//! Only the shape of the input is checked. The URL is stored exactly as
//! submitted; nothing here rewrites it.

use url::Url;

/// Reference base used to resolve scheme-less inputs such as `example.com`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Reasons a candidate URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL contains control characters")]
    ControlCharacter,

    #[error("missing protocol scheme")]
    MissingScheme,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` parses as a URI reference.
///
/// Absolute URLs with any scheme are accepted, and so are relative references
/// such as `example.com` or `/path`, which are checked as if resolved against
/// a fixed base. Inputs the parser would silently clean up (control
/// characters, including a trailing newline) are rejected, because the URL
/// is stored byte-for-byte and must later fit in a `Location` header.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty or whitespace-only string.
/// Returns [`UrlValidationError::ControlCharacter`] if any ASCII control byte is present.
/// Returns [`UrlValidationError::MissingScheme`] if the input starts with `:`.
/// Returns [`UrlValidationError::InvalidFormat`] if parsing fails.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://practicum.yandex.ru/").is_ok());
/// assert!(validate_url("example.com").is_ok());
/// assert!(validate_url("://example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    if input.starts_with(':') {
        return Err(UrlValidationError::MissingScheme);
    }

    match Url::parse(input) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE)?.join(input)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
