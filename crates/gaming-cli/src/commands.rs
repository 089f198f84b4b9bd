//! Command implementations

use std::path::Path;

use gaming_compiler::GamingCompiler;
use gaming_types::{
    table_definition_for_tuple, GamingTupleDefinitionType, IntermediateSection, IntermediateTuple,
    GAMING_TABLES,
};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::request::Request;

/// Outcome of a compile, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Committed,
    Failed,
}

/// Run every job in the request file and print the committed section.
///
/// Diagnostics go to stderr, one per line; warnings are printed even on
/// success.
pub fn compile(input: &Path, config: &CliConfig, pretty: bool) -> CliResult<CompileStatus> {
    let request = Request::from_json(&std::fs::read_to_string(input)?)?;
    info!(input = %input.display(), jobs = request.jobs.len(), "compiling");

    let mut compiler = GamingCompiler::new(&config.compiler);
    let section = request.run(&mut compiler);

    match compiler.finish(section) {
        Ok(output) => {
            for warning in &output.warnings {
                eprintln!("{}", warning);
            }
            validate_rows(&output.section)?;
            print_json(&output.section, pretty)?;
            Ok(CompileStatus::Committed)
        }
        Err(failure) => {
            for diagnostic in &failure.diagnostics {
                eprintln!("{}", diagnostic);
            }
            eprintln!("{}", failure);
            info!(errors = failure.errors().count(), "nothing committed");
            Ok(CompileStatus::Failed)
        }
    }
}

/// Check every row bound for one of the extension's own tables against
/// its column definitions.
fn validate_rows(section: &IntermediateSection) -> CliResult<()> {
    for tuple in section.tuples() {
        let Some(definition) = GamingTupleDefinitionType::by_name(tuple.definition_name()) else {
            continue;
        };
        let Some(table) = table_definition_for_tuple(definition.name()) else {
            continue;
        };
        let values = match tuple {
            IntermediateTuple::WixGameExplorer(row) => row.row_values(),
            _ => continue,
        };
        table.validate_row(&values)?;
    }
    Ok(())
}

/// Print the static table schema.
pub fn tables(pretty: bool) -> CliResult<()> {
    print_json(&GAMING_TABLES, pretty)
}

/// Print the effective configuration as TOML.
pub fn show_config(config: &CliConfig) -> CliResult<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
