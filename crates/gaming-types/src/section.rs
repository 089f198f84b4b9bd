//! Append-only tuple aggregator

use serde::{Deserialize, Serialize};

use crate::{
    CustomActionTuple, DirectoryTuple, IntermediateTuple, RegistryTuple, ShortcutTuple,
    WixActionTuple, WixGameExplorerTuple, WixSimpleReferenceTuple,
};

/// The set of tuples produced while compiling one section of a document.
///
/// Insertion order is preserved so generated output is reproducible;
/// consumers key tuples by identifier, not by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateSection {
    pub id: String,
    tuples: Vec<IntermediateTuple>,
}

macro_rules! typed_view {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(&self) -> impl Iterator<Item = &$ty> + '_ {
            self.tuples.iter().filter_map(|t| match t {
                IntermediateTuple::$variant(inner) => Some(inner),
                _ => None,
            })
        }
    };
}

impl IntermediateSection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tuples: Vec::new(),
        }
    }

    /// Append a tuple and return a reference to it.
    pub fn add(&mut self, tuple: impl Into<IntermediateTuple>) -> &IntermediateTuple {
        self.tuples.push(tuple.into());
        &self.tuples[self.tuples.len() - 1]
    }

    pub fn tuples(&self) -> &[IntermediateTuple] {
        &self.tuples
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Number of tuples belonging to the named definition.
    pub fn count_of(&self, definition_name: &str) -> usize {
        self.tuples
            .iter()
            .filter(|t| t.definition_name() == definition_name)
            .count()
    }

    typed_view!(game_explorers, WixGameExplorer, WixGameExplorerTuple);
    typed_view!(directories, Directory, DirectoryTuple);
    typed_view!(custom_actions, CustomAction, CustomActionTuple);
    typed_view!(
        /// Sequence scheduling tuples.
        actions,
        WixAction,
        WixActionTuple
    );
    typed_view!(shortcuts, Shortcut, ShortcutTuple);
    typed_view!(registry_values, Registry, RegistryTuple);
    typed_view!(simple_references, WixSimpleReference, WixSimpleReferenceTuple);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceLineNumber;

    fn directory(id: &str) -> DirectoryTuple {
        DirectoryTuple {
            source_line: SourceLineNumber::default(),
            id: id.into(),
            parent_ref: "TARGETDIR".into(),
            name: ".".into(),
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut section = IntermediateSection::new("fragment");
        section.add(directory("B"));
        section.add(WixSimpleReferenceTuple {
            source_line: SourceLineNumber::default(),
            table: "File".into(),
            primary_keys: "GameExe".into(),
        });
        section.add(directory("A"));

        let ids: Vec<_> = section.tuples().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["B", "GameExe", "A"]);
        assert_eq!(section.len(), 3);
        assert_eq!(section.count_of("Directory"), 2);
    }

    #[test]
    fn test_typed_views() {
        let mut section = IntermediateSection::new("fragment");
        assert!(section.is_empty());
        section.add(directory("A"));

        assert_eq!(section.directories().count(), 1);
        assert_eq!(section.shortcuts().count(), 0);
        assert_eq!(section.simple_references().count(), 0);
    }
}
