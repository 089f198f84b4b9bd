//! Namespace-qualified element tree
//!
//! The host compiler owns XML tokenizing; this crate only needs the shape
//! of what it produces. Attributes and children keep document order, which
//! the gaming compiler relies on when numbering tasks.

use serde::{Deserialize, Serialize};

use crate::SourceLineNumber;

/// Namespace of the gaming extension's elements and attributes.
pub const GAMING_NAMESPACE: &str = "http://wixtoolset.org/schemas/v4/wxs/gaming";

/// A namespace-qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub local_name: String,
}

impl QName {
    /// A name without a namespace.
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    pub fn qualified(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }

    /// A name in the gaming namespace.
    pub fn gaming(local_name: impl Into<String>) -> Self {
        Self::qualified(GAMING_NAMESPACE, local_name)
    }

    /// The namespace, treating an empty string the same as no namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.namespace() == Some(namespace)
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.namespace() {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// A single attribute on an element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// An un-namespaced attribute.
    pub fn local(local_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(QName::local(local_name), value)
    }
}

/// An element with its attributes and child elements in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: QName,
    #[serde(default)]
    pub source_line: SourceLineNumber,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            source_line: SourceLineNumber::default(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element in the gaming namespace.
    pub fn gaming(local_name: impl Into<String>) -> Self {
        Self::new(QName::gaming(local_name))
    }

    /// An element without a namespace, such as the host's `File` or `Extension`.
    pub fn local(local_name: impl Into<String>) -> Self {
        Self::new(QName::local(local_name))
    }

    pub fn at(mut self, source_line: SourceLineNumber) -> Self {
        self.source_line = source_line;
        self
    }

    pub fn with_attribute(mut self, local_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::local(local_name, value));
        self
    }

    pub fn with_qualified_attribute(mut self, name: QName, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn local_name(&self) -> &str {
        &self.name.local_name
    }

    /// Peek an un-namespaced attribute by local name, independent of the
    /// order in which the host resolves attributes.
    pub fn attribute(&self, local_name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace().is_none() && a.name.local_name == local_name)
    }
}
