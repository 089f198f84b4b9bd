//! Tuple creation helpers.

use gaming_types::{
    IntermediateSection, IntermediateTuple, RegistryRoot, RegistryTuple, SourceLineNumber,
    WixSimpleReferenceTuple,
};
use tracing::debug;

use crate::identifiers::create_identifier;

/// Append a tuple to the section and trace it.
pub(crate) fn emit(section: &mut IntermediateSection, tuple: impl Into<IntermediateTuple>) {
    let tuple = section.add(tuple);
    debug!(
        source = %tuple.source_line(),
        table = tuple.definition_name(),
        id = tuple.id(),
        "emitted tuple"
    );
}

/// Reference a row that must exist in `table` once everything is linked.
pub(crate) fn create_simple_reference(
    section: &mut IntermediateSection,
    source_line: &SourceLineNumber,
    table: &str,
    primary_keys: &str,
) {
    emit(
        section,
        WixSimpleReferenceTuple {
            source_line: source_line.clone(),
            table: table.to_string(),
            primary_keys: primary_keys.to_string(),
        },
    );
}

/// Create a registry value owned by `component_id`, keyed by a stable
/// generated identifier.
pub(crate) fn create_registry_row(
    section: &mut IntermediateSection,
    source_line: &SourceLineNumber,
    root: RegistryRoot,
    key: &str,
    name: Option<&str>,
    value: &str,
    component_id: &str,
) -> String {
    let root_number = root.msi_root().to_string();
    let lower_key = key.to_lowercase();
    let lower_name = name.map(str::to_lowercase).unwrap_or_default();
    let id = create_identifier("reg", &[component_id, &root_number, &lower_key, &lower_name]);

    emit(
        section,
        RegistryTuple {
            source_line: source_line.clone(),
            id: id.clone(),
            root,
            key: key.to_string(),
            name: name.map(str::to_string),
            value: Some(value.to_string()),
            component_ref: component_id.to_string(),
        },
    );
    id
}
