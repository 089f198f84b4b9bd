//! Gaming compiler error types.
//!
//! Every problem the compiler can find in a document is one variant of
//! `GamingError`. Errors are written to `Messaging` rather than returned,
//! so a single pass reports as many of them as possible.

use thiserror::Error;

/// Message number of `IllegalGameTaskDirectoryIdentifier`.
pub const ILLEGAL_GAME_TASK_DIRECTORY_IDENTIFIER: u32 = 6301;

/// Why a generated identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierViolation {
    TooLong { length: usize },
    InvalidGrammar,
}

impl std::fmt::Display for IdentifierViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong { length } => write!(f, "too long ({} characters)", length),
            Self::InvalidGrammar => write!(f, "not a legal identifier"),
        }
    }
}

/// Coarse classification of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequiredAttribute,
    UnexpectedAttributeOrElement,
    IdentifierConstraintViolation,
    MissingParentContext,
    UnimplementedFeature,
    IllegalAttributeValue,
}

/// Diagnostics produced while compiling gaming elements and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GamingError {
    #[error("The {element}/@{attribute} attribute was not found; it is required.")]
    ExpectedAttribute { element: String, attribute: String },

    #[error("The {element} element contains an unexpected attribute '{attribute}'.")]
    UnexpectedAttribute { element: String, attribute: String },

    #[error("The {parent} element contains an unexpected child element '{child}'.")]
    UnexpectedElement { parent: String, child: String },

    #[error(
        "The {element} element contains an unhandled extension attribute '{attribute}'. \
         Please ensure that the extension for attributes in the '{namespace}' namespace has been provided."
    )]
    UnsupportedExtensionAttribute {
        element: String,
        attribute: String,
        namespace: String,
    },

    #[error(
        "The {parent} element contains an unhandled extension element '{child}'. \
         Please ensure that the extension for elements in the '{namespace}' namespace has been provided."
    )]
    UnsupportedExtensionElement {
        parent: String,
        child: String,
        namespace: String,
    },

    #[error(
        "The generated identifier ({identifier}) for the directory containing Game Explorer tasks is {violation}. \
         Shorten the component identifier of your game executable so that the prefix and component ID combined \
         form a legal identifier of no more than 72 characters."
    )]
    IllegalGameTaskDirectoryIdentifier {
        identifier: String,
        violation: IdentifierViolation,
    },

    #[error(
        "The {parent}/@{attribute} attribute requires the {parent}/@{parent_attribute} attribute to be specified."
    )]
    ExpectedParentWithAttribute {
        parent: String,
        attribute: String,
        parent_attribute: String,
    },

    #[error("The {element} element was compiled without the '{key}' value from its parent context.")]
    MissingContextValue { element: String, key: String },

    #[error("The {element}/@{attribute} attribute's value cannot be an empty string.")]
    IllegalEmptyAttributeValue { element: String, attribute: String },

    #[error("The {element}/@{attribute} attribute's value, '{value}', is not a legal guid value.")]
    IllegalGuidValue {
        element: String,
        attribute: String,
        value: String,
    },

    #[error(
        "The {element}/@{attribute} attribute's value, '{value}', is not a legal identifier. \
         Identifiers may contain ASCII characters A-Z, a-z, digits, underscores (_), or periods (.). \
         Every identifier must begin with either a letter or an underscore."
    )]
    IllegalIdentifier {
        element: String,
        attribute: String,
        value: String,
    },

    #[error(
        "The {element}/@{attribute} attribute's value, '{value}', is not a legal yes/no value. \
         The only legal values are 'no' and 'yes'."
    )]
    IllegalYesNoValue {
        element: String,
        attribute: String,
        value: String,
    },

    #[error(
        "The {element}/@{attribute} attribute's value, '{value}', is too long for an identifier. \
         Standard identifiers are 72 characters long or less."
    )]
    IdentifierTooLong {
        element: String,
        attribute: String,
        value: String,
    },

    #[error(
        "The support task '{name}' cannot be registered: no link shortcut emitter is installed \
         for task directory {directory_id}, and Game Explorer requires one shortcut per task directory."
    )]
    UnimplementedSupportTaskLink { name: String, directory_id: String },

    #[error("The link shortcut for support task directory {directory_id} could not be created: {reason}")]
    SupportLinkFailed { directory_id: String, reason: String },
}

impl GamingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExpectedAttribute { .. } => ErrorKind::MissingRequiredAttribute,
            Self::UnexpectedAttribute { .. }
            | Self::UnexpectedElement { .. }
            | Self::UnsupportedExtensionAttribute { .. }
            | Self::UnsupportedExtensionElement { .. } => ErrorKind::UnexpectedAttributeOrElement,
            Self::IllegalGameTaskDirectoryIdentifier { .. } | Self::IdentifierTooLong { .. } => {
                ErrorKind::IdentifierConstraintViolation
            }
            Self::ExpectedParentWithAttribute { .. } | Self::MissingContextValue { .. } => {
                ErrorKind::MissingParentContext
            }
            Self::UnimplementedSupportTaskLink { .. } | Self::SupportLinkFailed { .. } => {
                ErrorKind::UnimplementedFeature
            }
            Self::IllegalEmptyAttributeValue { .. }
            | Self::IllegalGuidValue { .. }
            | Self::IllegalIdentifier { .. }
            | Self::IllegalYesNoValue { .. } => ErrorKind::IllegalAttributeValue,
        }
    }

    /// Extension-specific message number, where one is assigned.
    pub fn message_id(&self) -> Option<u32> {
        match self {
            Self::IllegalGameTaskDirectoryIdentifier { .. } => {
                Some(ILLEGAL_GAME_TASK_DIRECTORY_IDENTIFIER)
            }
            _ => None,
        }
    }
}

/// Result type for fallible host hooks.
pub type GamingResult<T> = Result<T, GamingError>;
