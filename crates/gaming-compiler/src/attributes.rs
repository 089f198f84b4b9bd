//! Attribute value resolution shared by every gaming element.
//!
//! Each helper validates the raw value, records any problem in `Messaging`
//! and still returns something usable so parsing can carry on and surface
//! the rest of the document's diagnostics.

use gaming_types::{Attribute, SourceLineNumber};
use uuid::Uuid;

use crate::error::GamingError;
use crate::identifiers::{is_valid_identifier, IDENTIFIER_MAX_LENGTH};
use crate::messaging::Messaging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
    IllegalValue,
}

/// Plain string value. Empty strings are reported but returned.
pub fn value(
    messaging: &mut Messaging,
    source_line: &SourceLineNumber,
    element: &str,
    attribute: &Attribute,
) -> String {
    if attribute.value.is_empty() {
        messaging.error(
            source_line,
            GamingError::IllegalEmptyAttributeValue {
                element: element.to_string(),
                attribute: attribute.name.local_name.clone(),
            },
        );
    }
    attribute.value.clone()
}

/// GUID value, normalised to a braced upper-case string.
///
/// Illegal values are reported and returned unchanged.
pub fn guid_value(
    messaging: &mut Messaging,
    source_line: &SourceLineNumber,
    element: &str,
    attribute: &Attribute,
) -> String {
    let raw = value(messaging, source_line, element, attribute);
    if raw.is_empty() {
        return raw;
    }

    match Uuid::parse_str(raw.trim()) {
        Ok(guid) => format!("{{{}}}", guid.hyphenated()).to_uppercase(),
        Err(_) => {
            messaging.error(
                source_line,
                GamingError::IllegalGuidValue {
                    element: element.to_string(),
                    attribute: attribute.name.local_name.clone(),
                    value: raw.clone(),
                },
            );
            raw
        }
    }
}

/// Identifier value. Grammar violations are errors; excess length only warns.
pub fn identifier_value(
    messaging: &mut Messaging,
    source_line: &SourceLineNumber,
    element: &str,
    attribute: &Attribute,
) -> String {
    let raw = value(messaging, source_line, element, attribute);
    if raw.is_empty() {
        return raw;
    }

    if !is_valid_identifier(&raw) {
        messaging.error(
            source_line,
            GamingError::IllegalIdentifier {
                element: element.to_string(),
                attribute: attribute.name.local_name.clone(),
                value: raw.clone(),
            },
        );
    } else if raw.chars().count() > IDENTIFIER_MAX_LENGTH {
        messaging.warning(
            source_line,
            GamingError::IdentifierTooLong {
                element: element.to_string(),
                attribute: attribute.name.local_name.clone(),
                value: raw.clone(),
            },
        );
    }
    raw
}

pub fn yes_no_value(
    messaging: &mut Messaging,
    source_line: &SourceLineNumber,
    element: &str,
    attribute: &Attribute,
) -> YesNo {
    match value(messaging, source_line, element, attribute).as_str() {
        "yes" => YesNo::Yes,
        "no" => YesNo::No,
        "" => YesNo::IllegalValue,
        other => {
            messaging.error(
                source_line,
                GamingError::IllegalYesNoValue {
                    element: element.to_string(),
                    attribute: attribute.name.local_name.clone(),
                    value: other.to_string(),
                },
            );
            YesNo::IllegalValue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn run<T>(
        f: impl FnOnce(&mut Messaging, &SourceLineNumber, &str, &Attribute) -> T,
        value: &str,
    ) -> (T, Messaging) {
        let mut messaging = Messaging::new();
        let attribute = Attribute::local("Id", value);
        let result = f(&mut messaging, &SourceLineNumber::default(), "Game", &attribute);
        (result, messaging)
    }

    #[test]
    fn test_guid_normalised() {
        let (guid, messaging) = run(guid_value, "12345678-1234-5678-90ab-1234567890ab");
        assert_eq!(guid, "{12345678-1234-5678-90AB-1234567890AB}");
        assert!(!messaging.encountered_error());

        let (guid, _) = run(guid_value, "{12345678-1234-5678-90AB-1234567890AB}");
        assert_eq!(guid, "{12345678-1234-5678-90AB-1234567890AB}");
    }

    #[test]
    fn test_guid_rejects_generate_and_garbage() {
        for bad in ["*", "not-a-guid", "{1234}"] {
            let (raw, messaging) = run(guid_value, bad);
            assert_eq!(raw, bad);
            assert_eq!(messaging.error_count(), 1);
            assert!(matches!(
                messaging.diagnostics()[0].error,
                GamingError::IllegalGuidValue { .. }
            ));
        }
    }

    #[test]
    fn test_empty_value_reported_once() {
        let (raw, messaging) = run(guid_value, "");
        assert!(raw.is_empty());
        assert_eq!(messaging.error_count(), 1);
        assert_eq!(
            messaging.diagnostics()[0].error.kind(),
            ErrorKind::IllegalAttributeValue
        );
    }

    #[test]
    fn test_identifier_grammar_is_error() {
        let (_, messaging) = run(identifier_value, "9lives");
        assert!(matches!(
            messaging.diagnostics()[0].error,
            GamingError::IllegalIdentifier { .. }
        ));
    }

    #[test]
    fn test_long_identifier_only_warns() {
        let (id, messaging) = run(identifier_value, &"g".repeat(80));
        assert_eq!(id.len(), 80);
        assert!(!messaging.encountered_error());
        assert_eq!(messaging.diagnostics().len(), 1);
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(run(yes_no_value, "yes").0, YesNo::Yes);
        assert_eq!(run(yes_no_value, "no").0, YesNo::No);

        let (value, messaging) = run(yes_no_value, "true");
        assert_eq!(value, YesNo::IllegalValue);
        assert!(matches!(
            messaging.diagnostics()[0].error,
            GamingError::IllegalYesNoValue { .. }
        ));
    }
}
