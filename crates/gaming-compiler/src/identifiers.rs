//! Identifier synthesis and validation.
//!
//! Task directories are keyed by identifiers built from a fixed prefix and
//! the owning component's identifier. Those must satisfy the installer's
//! identifier grammar and length limit, and must be stable across builds:
//! the same inputs always yield the same identifier.

use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;
use sha1::{Digest, Sha1};

use crate::error::IdentifierViolation;

/// Longest identifier the installer accepts.
pub const IDENTIFIER_MAX_LENGTH: usize = 72;

static LEGAL_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][0-9A-Za-z_.]*$").expect("identifier pattern"));

/// Whether `id` matches the installer identifier grammar (length aside).
pub fn is_valid_identifier(id: &str) -> bool {
    LEGAL_IDENTIFIER.is_match(id)
}

/// An identifier that failed synthesis, kept so callers can report it and
/// keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedIdentifier {
    pub identifier: String,
    pub violation: IdentifierViolation,
}

/// Build `prefix_ownerId`, checking length and grammar.
///
/// Never truncates: an identifier over the limit is rejected as-is.
pub fn synthesize(prefix: &str, owner_id: &str) -> Result<String, RejectedIdentifier> {
    let identifier = format!("{}_{}", prefix, owner_id);
    let length = identifier.chars().count();

    let violation = if length > IDENTIFIER_MAX_LENGTH {
        Some(IdentifierViolation::TooLong { length })
    } else if !is_valid_identifier(&identifier) {
        Some(IdentifierViolation::InvalidGrammar)
    } else {
        None
    };

    match violation {
        Some(violation) => Err(RejectedIdentifier {
            identifier,
            violation,
        }),
        None => Ok(identifier),
    }
}

/// Stable generated identifier: `prefix` followed by the SHA-1 of the
/// `|`-joined arguments in identifier-safe base64.
pub fn create_identifier(prefix: &str, args: &[&str]) -> String {
    let hash = Sha1::digest(args.join("|").as_bytes());
    let encoded = STANDARD.encode(hash);

    let mut identifier = String::with_capacity(prefix.len() + encoded.len());
    identifier.push_str(prefix);
    identifier.extend(encoded.trim_end_matches('=').chars().map(|c| match c {
        '+' => '.',
        '/' => '_',
        other => other,
    }));
    identifier
}
