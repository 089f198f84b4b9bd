//! Typed records emitted into an intermediate section
//!
//! Each tuple mirrors one row of the installer's relational representation.
//! Tuples are created once and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::SourceLineNumber;

// ── Game registration ───────────────────────────────────────────────

/// Registers one game instance with Game Explorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WixGameExplorerTuple {
    pub source_line: SourceLineNumber,
    /// Braced, upper-case GUID identifying the game instance.
    pub instance_id: String,
    /// File carrying the game definition (GDF) resources.
    pub file_ref: String,
}

// ── Directory ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryTuple {
    pub source_line: SourceLineNumber,
    pub id: String,
    pub parent_ref: String,
    pub name: String,
}

// ── Custom action and scheduling ────────────────────────────────────

/// Kind of custom action. Only property assignment is produced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomActionType {
    /// Set a property (or directory) from formatted text.
    SetProperty,
}

impl CustomActionType {
    /// Windows Installer custom action type number.
    pub fn msi_type(self) -> u32 {
        match self {
            // msidbCustomActionTypeProperty | msidbCustomActionTypeTextData
            Self::SetProperty => 51,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomActionExecution {
    Immediate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomActionTuple {
    pub source_line: SourceLineNumber,
    pub id: String,
    pub action_type: CustomActionType,
    pub execution: CustomActionExecution,
    /// Property (here: directory id) being assigned.
    pub source: String,
    /// Formatted value assigned to `source`.
    pub target: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceTable {
    InstallExecuteSequence,
}

impl std::fmt::Display for SequenceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstallExecuteSequence => write!(f, "InstallExecuteSequence"),
        }
    }
}

/// Schedules an action relative to another action in a sequence table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WixActionTuple {
    pub source_line: SourceLineNumber,
    pub sequence_table: SequenceTable,
    pub action: String,
    pub condition: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

// ── Shortcut ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutTuple {
    pub source_line: SourceLineNumber,
    pub id: String,
    pub directory_ref: String,
    /// Long display name.
    pub name: String,
    /// 8.3 name, present only when `name` is not already a valid short name.
    pub short_name: Option<String>,
    pub component_ref: String,
    pub target: String,
    pub arguments: Option<String>,
    pub working_directory: String,
}

impl ShortcutTuple {
    /// Installer `Name` column value: `short|long` or just the name.
    pub fn filename(&self) -> String {
        match &self.short_name {
            Some(short) => format!("{}|{}", short, self.name),
            None => self.name.clone(),
        }
    }
}

// ── Registry ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryRoot {
    ClassesRoot,
    LocalMachine,
}

impl RegistryRoot {
    /// Windows Installer root number (msidbRegistryRoot*).
    pub fn msi_root(self) -> u32 {
        match self {
            Self::ClassesRoot => 0,
            Self::LocalMachine => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryTuple {
    pub source_line: SourceLineNumber,
    pub id: String,
    pub root: RegistryRoot,
    pub key: String,
    pub name: Option<String>,
    pub value: Option<String>,
    pub component_ref: String,
}

// ── Cross-references ────────────────────────────────────────────────

/// Asserts that a row keyed by `primary_keys` exists in `table`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WixSimpleReferenceTuple {
    pub source_line: SourceLineNumber,
    pub table: String,
    pub primary_keys: String,
}

// ── Union ───────────────────────────────────────────────────────────

/// Any tuple the gaming compiler can emit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IntermediateTuple {
    WixGameExplorer(WixGameExplorerTuple),
    Directory(DirectoryTuple),
    CustomAction(CustomActionTuple),
    WixAction(WixActionTuple),
    Shortcut(ShortcutTuple),
    Registry(RegistryTuple),
    WixSimpleReference(WixSimpleReferenceTuple),
}

impl IntermediateTuple {
    /// Name of the tuple definition this record belongs to.
    pub fn definition_name(&self) -> &'static str {
        match self {
            Self::WixGameExplorer(_) => "WixGameExplorer",
            Self::Directory(_) => "Directory",
            Self::CustomAction(_) => "CustomAction",
            Self::WixAction(_) => "WixAction",
            Self::Shortcut(_) => "Shortcut",
            Self::Registry(_) => "Registry",
            Self::WixSimpleReference(_) => "WixSimpleReference",
        }
    }

    /// Identifier consumers key this record by.
    pub fn id(&self) -> &str {
        match self {
            Self::WixGameExplorer(t) => &t.instance_id,
            Self::Directory(t) => &t.id,
            Self::CustomAction(t) => &t.id,
            Self::WixAction(t) => &t.action,
            Self::Shortcut(t) => &t.id,
            Self::Registry(t) => &t.id,
            Self::WixSimpleReference(t) => &t.primary_keys,
        }
    }

    pub fn source_line(&self) -> &SourceLineNumber {
        match self {
            Self::WixGameExplorer(t) => &t.source_line,
            Self::Directory(t) => &t.source_line,
            Self::CustomAction(t) => &t.source_line,
            Self::WixAction(t) => &t.source_line,
            Self::Shortcut(t) => &t.source_line,
            Self::Registry(t) => &t.source_line,
            Self::WixSimpleReference(t) => &t.source_line,
        }
    }
}

macro_rules! impl_from_tuple {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for IntermediateTuple {
                fn from(tuple: $ty) -> Self {
                    Self::$variant(tuple)
                }
            }
        )*
    };
}

impl_from_tuple! {
    WixGameExplorer => WixGameExplorerTuple,
    Directory => DirectoryTuple,
    CustomAction => CustomActionTuple,
    WixAction => WixActionTuple,
    Shortcut => ShortcutTuple,
    Registry => RegistryTuple,
    WixSimpleReference => WixSimpleReferenceTuple,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(short_name: Option<&str>) -> ShortcutTuple {
        ShortcutTuple {
            source_line: SourceLineNumber::default(),
            id: "WixPlayTask0_GameComp".into(),
            directory_ref: "WixPlayTask0_GameComp".into(),
            name: "Play the Game".into(),
            short_name: short_name.map(str::to_string),
            component_ref: "GameComp".into(),
            target: "[#GameExe]".into(),
            arguments: None,
            working_directory: "INSTALLFOLDER".into(),
        }
    }

    #[test]
    fn test_shortcut_filename_with_short_name() {
        assert_eq!(shortcut(Some("abcdefgh")).filename(), "abcdefgh|Play the Game");
    }

    #[test]
    fn test_shortcut_filename_without_short_name() {
        assert_eq!(shortcut(None).filename(), "Play the Game");
    }

    #[test]
    fn test_set_property_is_type_51() {
        assert_eq!(CustomActionType::SetProperty.msi_type(), 51);
    }

    #[test]
    fn test_registry_roots() {
        assert_eq!(RegistryRoot::ClassesRoot.msi_root(), 0);
        assert_eq!(RegistryRoot::LocalMachine.msi_root(), 2);
    }

    #[test]
    fn test_tuple_serializes_with_type_tag() {
        let tuple: IntermediateTuple = DirectoryTuple {
            source_line: SourceLineNumber::default(),
            id: "WixPlayTasksRoot_GameComp".into(),
            parent_ref: "TARGETDIR".into(),
            name: ".".into(),
        }
        .into();

        let json = serde_json::to_value(&tuple).unwrap();
        assert_eq!(json["type"], "Directory");
        assert_eq!(json["parent_ref"], "TARGETDIR");
        assert_eq!(tuple.definition_name(), "Directory");
        assert_eq!(tuple.id(), "WixPlayTasksRoot_GameComp");
    }
}
