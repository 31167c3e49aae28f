//! Short code generation.
//!
//! Codes are derived from the long URL by hashing it with SHA-256, encoding the
//! digest with the URL-safe base64 alphabet and keeping the first
//! [`CODE_LENGTH`] characters.

use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 8;

/// What goes into the hash besides the URL itself.
///
/// # Policies
///
/// - [`CodePolicy::Content`] hashes the URL alone. The same URL always yields
///   the same first candidate, which is what makes de-duplication possible.
/// - [`CodePolicy::Timestamped`] mixes the current time into the hash, so every
///   submission gets a fresh code. Repeated submissions of one URL produce
///   separate mappings with separate hit counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePolicy {
    #[default]
    Content,
    Timestamped,
}

impl CodePolicy {
    /// Returns true when an existing mapping for the same URL should be reused.
    pub fn deduplicates(self) -> bool {
        matches!(self, CodePolicy::Content)
    }
}

impl FromStr for CodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "content" => Ok(CodePolicy::Content),
            "timestamped" => Ok(CodePolicy::Timestamped),
            other => Err(format!(
                "unknown code policy '{other}', expected 'content' or 'timestamped'"
            )),
        }
    }
}

impl fmt::Display for CodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePolicy::Content => f.write_str("content"),
            CodePolicy::Timestamped => f.write_str("timestamped"),
        }
    }
}

/// Generates a candidate short code for `url`.
///
/// `attempt` is the zero-based collision retry counter. Attempt `0` hashes the
/// policy input unchanged; later attempts append `#<attempt>` so that a retry
/// under [`CodePolicy::Content`] yields a different but still reproducible code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com/", CodePolicy::Content, 0);
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generate_code("https://example.com/", CodePolicy::Content, 0));
/// ```
pub fn generate_code(url: &str, policy: CodePolicy, attempt: u32) -> String {
    let mut input = String::from(url);

    if policy == CodePolicy::Timestamped {
        input.push_str(&Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true));
    }

    if attempt > 0 {
        input.push('#');
        input.push_str(&attempt.to_string());
    }

    code_from_input(input.as_bytes())
}

/// Hashes `input` and returns the truncated URL-safe base64 digest.
///
/// A 32-byte digest encodes to 44 characters, so the first eight are never
/// padding.
pub fn code_from_input(input: &[u8]) -> String {
    let digest = Sha256::digest(input);
    let mut encoded = base64::engine::general_purpose::URL_SAFE.encode(digest);
    encoded.truncate(CODE_LENGTH);
    encoded
}
