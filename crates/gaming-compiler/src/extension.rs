//! Seams to the surrounding compiler.
//!
//! `ExtensionHost` receives every attribute or child element that belongs
//! to some other namespace. `SupportLinkEmitter` decides what record a
//! support task's URL shortcut becomes; there is no built-in shape for it.

use gaming_types::{Attribute, Element, IntermediateSection, SourceLineNumber};

use crate::error::{GamingError, GamingResult};
use crate::messaging::Messaging;

/// Delegation target for nodes outside the gaming namespace.
pub trait ExtensionHost: Send {
    fn parse_extension_attribute(
        &mut self,
        messaging: &mut Messaging,
        section: &mut IntermediateSection,
        element: &Element,
        attribute: &Attribute,
    );

    fn parse_extension_element(
        &mut self,
        messaging: &mut Messaging,
        section: &mut IntermediateSection,
        parent: &Element,
        element: &Element,
    );
}

/// Host with no other extensions loaded: every foreign node is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtensions;

impl ExtensionHost for NoExtensions {
    fn parse_extension_attribute(
        &mut self,
        messaging: &mut Messaging,
        _section: &mut IntermediateSection,
        element: &Element,
        attribute: &Attribute,
    ) {
        messaging.error(
            &element.source_line,
            GamingError::UnsupportedExtensionAttribute {
                element: element.local_name().to_string(),
                attribute: attribute.name.local_name.clone(),
                namespace: attribute.name.namespace().unwrap_or_default().to_string(),
            },
        );
    }

    fn parse_extension_element(
        &mut self,
        messaging: &mut Messaging,
        _section: &mut IntermediateSection,
        parent: &Element,
        element: &Element,
    ) {
        messaging.error(
            &element.source_line,
            GamingError::UnsupportedExtensionElement {
                parent: parent.local_name().to_string(),
                child: element.local_name().to_string(),
                namespace: element.name.namespace().unwrap_or_default().to_string(),
            },
        );
    }
}

/// Everything needed to emit one support task's URL shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportLink<'a> {
    pub source_line: &'a SourceLineNumber,
    pub component_id: &'a str,
    /// Task directory the shortcut lives in.
    pub directory_id: &'a str,
    /// Shortcut identifier; the directory id, since each task directory
    /// holds exactly one shortcut.
    pub shortcut_id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
}

/// Emits the record a support task's link becomes.
pub trait SupportLinkEmitter: Send {
    fn emit_support_link(
        &mut self,
        section: &mut IntermediateSection,
        link: &SupportLink<'_>,
    ) -> GamingResult<()>;
}
