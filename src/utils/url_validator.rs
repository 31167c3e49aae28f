//! Validation of submitted long URLs.
//!
//! Accepts absolute HTTP(S) URLs whose host looks like a real domain name and
//! returns the canonical serialization produced by the [`url`] crate.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL missing scheme or host")]
    MissingSchemeOrHost,

    #[error("URL scheme must be http or https")]
    UnsupportedScheme,

    #[error("invalid host in URL")]
    InvalidHost,
}

/// Validates `input` and returns its canonical form.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme and host must both be present
/// 3. Scheme must be exactly `http` or `https`
/// 4. Host must contain at least one dot and no whitespace
///
/// Leading and trailing whitespace is trimmed before parsing. The returned
/// string is the WHATWG serialization: scheme and host lowercased, an empty
/// path becomes `/`, percent-encoding normalized.
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] whose rule the input violates.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("HTTP://Example.COM").unwrap(), "http://example.com/");
/// assert!(validate_url("ftp://x.com").is_err());
/// assert!(validate_url("http://nodothost").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    let host = url.host_str().unwrap_or_default();
    if url.scheme().is_empty() || host.is_empty() {
        return Err(UrlValidationError::MissingSchemeOrHost);
    }

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    if !host.contains('.') || host.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::InvalidHost);
    }

    Ok(url.to_string())
}
