//! 8.3 short filenames for shortcuts.

use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;
use sha1::{Digest, Sha1};

const SHORT_NAME_LENGTH: usize = 8;
const MAX_EXTENSION_LENGTH: usize = 4;

static LEGAL_SHORT_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\\?|><:/*"+,;=\[\]. ]{1,8}(\.[^\\?|><:/*"+,;=\[\]. ]{0,3})?$"#)
        .expect("short filename pattern")
});

static LEGAL_WILDCARD_SHORT_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\\|><:/"+,;=\[\]. ]{1,16}(\.[^\\|><:/"+,;=\[\]. ]{0,6})?$"#)
        .expect("wildcard short filename pattern")
});

static LOC_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\(loc\.[_A-Za-z][0-9A-Za-z_.]*\)$").expect("loc pattern"));

/// Whether `name` already fits the 8.3 short filename rules.
pub fn is_valid_short_filename(name: &str, allow_wildcards: bool) -> bool {
    if name.is_empty() {
        return false;
    }
    if allow_wildcards {
        LEGAL_WILDCARD_SHORT_FILENAME.is_match(name)
    } else {
        LEGAL_SHORT_FILENAME.is_match(name)
    }
}

/// Extension of `name` including its dot, empty when there is none.
fn extension(name: &str) -> &str {
    match name.rfind(['.', '\\', '/']) {
        Some(idx) if name[idx..].starts_with('.') && idx + 1 < name.len() => &name[idx..],
        _ => "",
    }
}

/// Generate a stable short filename for `long_name`.
///
/// The name is hashed together with `args` so distinct shortcuts sharing a
/// long name still get distinct short names.
pub fn create_short_name(
    long_name: &str,
    keep_extension: bool,
    allow_wildcards: bool,
    args: &[&str],
) -> String {
    let long_name = if LOC_IDENTIFIER.is_match(long_name) {
        long_name.to_string()
    } else {
        long_name.to_lowercase()
    };

    let mut parts = Vec::with_capacity(1 + args.len());
    parts.push(long_name.as_str());
    parts.extend_from_slice(args);
    let hash = Sha1::digest(parts.join("|").as_bytes());

    let mut short_name: String = STANDARD
        .encode(hash)
        .chars()
        .take(SHORT_NAME_LENGTH)
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    if keep_extension {
        let ext: String = extension(&long_name).chars().take(MAX_EXTENSION_LENGTH).collect();
        let with_extension = format!("{}{}", short_name, ext);
        if is_valid_short_filename(&with_extension, allow_wildcards) {
            short_name = with_extension;
        }
    }

    short_name.to_lowercase()
}
