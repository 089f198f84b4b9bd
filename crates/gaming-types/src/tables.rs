//! Persisted table schema for the gaming extension
//!
//! Consumers of the installer database expect the `WixGameExplorer` table
//! with exactly these column names and key semantics.

use serde::Serialize;

use crate::WixGameExplorerTuple;

// ── Column and table definitions ────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ColumnCategory {
    Guid,
    Identifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ColumnModularizeType {
    None,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub length: usize,
    pub primary_key: bool,
    pub nullable: bool,
    pub category: ColumnCategory,
    pub key_table: Option<&'static str>,
    pub key_column: Option<u32>,
    pub modularize: ColumnModularizeType,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    pub name: &'static str,
    pub columns: &'static [ColumnDefinition],
    pub tuple_definition_name: &'static str,
    pub tuple_id_is_primary_key: bool,
}

/// A schema check that failed for one row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("Table {table} expects {expected} columns, row has {actual}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Column {table}.{column} is not nullable")]
    NullValue {
        table: &'static str,
        column: &'static str,
    },

    #[error("Column {table}.{column} holds {length} characters, width is {width}")]
    ValueTooLong {
        table: &'static str,
        column: &'static str,
        width: usize,
        length: usize,
    },
}

impl TableDefinition {
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> + '_ {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Check one row of values, in column order, against this definition.
    pub fn validate_row(&self, values: &[Option<String>]) -> Result<(), SchemaViolation> {
        if values.len() != self.columns.len() {
            return Err(SchemaViolation::ColumnCount {
                table: self.name,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        for (column, value) in self.columns.iter().zip(values) {
            match value {
                None if !column.nullable => {
                    return Err(SchemaViolation::NullValue {
                        table: self.name,
                        column: column.name,
                    })
                }
                Some(v)
                    if column.column_type == ColumnType::String
                        && v.chars().count() > column.length =>
                {
                    return Err(SchemaViolation::ValueTooLong {
                        table: self.name,
                        column: column.name,
                        width: column.length,
                        length: v.chars().count(),
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ── WixGameExplorer ─────────────────────────────────────────────────

pub const WIX_GAME_EXPLORER_TABLE: TableDefinition = TableDefinition {
    name: "WixGameExplorer",
    columns: &[
        ColumnDefinition {
            name: "InstanceId",
            column_type: ColumnType::String,
            length: 38,
            primary_key: true,
            nullable: false,
            category: ColumnCategory::Guid,
            key_table: None,
            key_column: None,
            modularize: ColumnModularizeType::None,
            description: "The instance ID of the game executable to be registered in Game Explorer.",
        },
        ColumnDefinition {
            name: "File_",
            column_type: ColumnType::String,
            length: 72,
            primary_key: false,
            nullable: false,
            category: ColumnCategory::Identifier,
            key_table: Some("File"),
            key_column: Some(1),
            modularize: ColumnModularizeType::Column,
            description: "The file representing the game executable.",
        },
    ],
    tuple_definition_name: "WixGameExplorer",
    tuple_id_is_primary_key: false,
};

/// Every table this extension contributes to the installer database.
pub const GAMING_TABLES: &[TableDefinition] = &[WIX_GAME_EXPLORER_TABLE];

/// Backend lookup: the table a tuple definition is laid out into.
pub fn table_definition_for_tuple(tuple_definition_name: &str) -> Option<&'static TableDefinition> {
    GAMING_TABLES
        .iter()
        .find(|t| t.tuple_definition_name == tuple_definition_name)
}

impl WixGameExplorerTuple {
    /// Row values in `WixGameExplorer` column order.
    pub fn row_values(&self) -> Vec<Option<String>> {
        vec![Some(self.instance_id.clone()), Some(self.file_ref.clone())]
    }
}

// ── Tuple definitions ───────────────────────────────────────────────

/// Tuple definitions owned by the gaming extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GamingTupleDefinitionType {
    WixGameExplorer,
}

impl GamingTupleDefinitionType {
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "WixGameExplorer" => Some(Self::WixGameExplorer),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WixGameExplorer => "WixGameExplorer",
        }
    }

    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::WixGameExplorer => &["InstanceId", "FileRef"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceLineNumber;

    fn game(instance_id: &str, file_ref: &str) -> WixGameExplorerTuple {
        WixGameExplorerTuple {
            source_line: SourceLineNumber::default(),
            instance_id: instance_id.into(),
            file_ref: file_ref.into(),
        }
    }

    #[test]
    fn test_game_explorer_schema_shape() {
        let table = &WIX_GAME_EXPLORER_TABLE;
        let keys: Vec<_> = table.primary_key_columns().map(|c| c.name).collect();
        assert_eq!(keys, vec!["InstanceId"]);

        let file = table.column("File_").unwrap();
        assert_eq!(file.key_table, Some("File"));
        assert_eq!(file.key_column, Some(1));
        assert!(!file.nullable);
        assert!(!table.tuple_id_is_primary_key);
    }

    #[test]
    fn test_row_values_validate() {
        let row = game("{12345678-1234-5678-90AB-1234567890AB}", "GameExe").row_values();
        assert!(WIX_GAME_EXPLORER_TABLE.validate_row(&row).is_ok());
    }

    #[test]
    fn test_validate_rejects_long_file_ref() {
        let row = game("{12345678-1234-5678-90AB-1234567890AB}", &"f".repeat(73)).row_values();
        assert!(matches!(
            WIX_GAME_EXPLORER_TABLE.validate_row(&row),
            Err(SchemaViolation::ValueTooLong { column: "File_", width: 72, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_null_and_count() {
        let null_row = vec![Some("{12345678-1234-5678-90AB-1234567890AB}".to_string()), None];
        assert!(matches!(
            WIX_GAME_EXPLORER_TABLE.validate_row(&null_row),
            Err(SchemaViolation::NullValue { column: "File_", .. })
        ));
        assert!(matches!(
            WIX_GAME_EXPLORER_TABLE.validate_row(&[]),
            Err(SchemaViolation::ColumnCount { expected: 2, actual: 0, .. })
        ));
    }

    #[test]
    fn test_tuple_definition_lookup() {
        let def = GamingTupleDefinitionType::by_name("WixGameExplorer").unwrap();
        assert_eq!(def.field_names(), &["InstanceId", "FileRef"]);
        assert!(GamingTupleDefinitionType::by_name("Shortcut").is_none());
        assert_eq!(
            table_definition_for_tuple(def.name()).map(|t| t.name),
            Some("WixGameExplorer")
        );
    }
}
