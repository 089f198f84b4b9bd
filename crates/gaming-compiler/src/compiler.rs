//! Game Explorer element and attribute translation.
//!
//! `GamingCompiler` is driven by the host once per gaming node it meets:
//! `parse_element` for a `Game` under a `File`, `parse_attribute` for
//! `IsRichSavedGame` on an `Extension`. Tuples go straight into the
//! caller's section; `finish` then decides whether that section is
//! committed or thrown away.

use gaming_types::{
    Attribute, Element, IntermediateSection, ShortcutTuple, SourceLineNumber,
    WixGameExplorerTuple, GAMING_NAMESPACE,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::attributes::{guid_value, identifier_value, value, yes_no_value, YesNo};
use crate::config::CompilerConfig;
use crate::context::{ContextValues, FileContext, COMPONENT_ID, EXTENSION_ID, PROG_ID};
use crate::error::GamingError;
use crate::extension::{ExtensionHost, NoExtensions, SupportLink, SupportLinkEmitter};
use crate::messaging::{Diagnostic, MessageLevel, Messaging};
use crate::rich_saved_game::RichSavedGame;
use crate::rows::{create_simple_reference, emit};
use crate::short_names::{create_short_name, is_valid_short_filename};
use crate::tasks::{create_task_directory, TaskKind, TaskOrdinals, TaskRoots};

/// Custom action that registers games with Game Explorer at install time.
pub const SCHEDULE_GAME_EXPLORER: &str = "WixSchedGameExplorer";

// ── Outcome ─────────────────────────────────────────────────────────

/// A committed section together with any warnings raised on the way.
#[derive(Debug)]
pub struct CompilationOutput {
    pub section: IntermediateSection,
    pub warnings: Vec<Diagnostic>,
}

/// Compilation recorded at least one error; nothing is committed.
#[derive(Debug, Error)]
#[error(
    "compilation of section '{}' failed with {} diagnostic(s)",
    .discarded.id,
    .diagnostics.len()
)]
pub struct CompilationFailure {
    pub diagnostics: Vec<Diagnostic>,
    /// Whatever was emitted before and after the first error. Kept for
    /// inspection only.
    pub discarded: IntermediateSection,
}

impl CompilationFailure {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(|d| d.level == MessageLevel::Error)
    }
}

// ── Compiler ────────────────────────────────────────────────────────

/// State carried through one `Game` element.
struct GameState {
    instance_id: Option<String>,
    roots: TaskRoots,
    ordinals: TaskOrdinals,
}

pub struct GamingCompiler {
    messaging: Messaging,
    extensions: Box<dyn ExtensionHost>,
    support_links: Option<Box<dyn SupportLinkEmitter>>,
}

impl Default for GamingCompiler {
    fn default() -> Self {
        Self::new(&CompilerConfig::default())
    }
}

impl GamingCompiler {
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            messaging: Messaging::with_config(config),
            extensions: Box::new(NoExtensions),
            support_links: None,
        }
    }

    pub fn with_extension_host(mut self, host: impl ExtensionHost + 'static) -> Self {
        self.extensions = Box::new(host);
        self
    }

    pub fn with_support_link_emitter(mut self, emitter: impl SupportLinkEmitter + 'static) -> Self {
        self.support_links = Some(Box::new(emitter));
        self
    }

    pub fn messaging(&self) -> &Messaging {
        &self.messaging
    }

    /// Translate a gaming element found under `parent`.
    pub fn parse_element(
        &mut self,
        section: &mut IntermediateSection,
        parent: &Element,
        element: &Element,
        context: &ContextValues,
    ) {
        match (parent.local_name(), element.local_name()) {
            ("File", "Game") => {
                let Some(file) =
                    FileContext::resolve(context, element.local_name(), &element.source_line, &mut self.messaging)
                else {
                    return;
                };
                self.parse_game(section, element, &file);
            }
            _ => self.unexpected_element(parent, element),
        }
    }

    /// Translate a gaming attribute found on `parent`.
    ///
    /// On an `Extension`, the parent's raw `Id` is written into `context`
    /// as `ExtensionId` before the attribute itself is looked at.
    pub fn parse_attribute(
        &mut self,
        section: &mut IntermediateSection,
        parent: &Element,
        attribute: &Attribute,
        context: &mut ContextValues,
    ) {
        let source_line = &parent.source_line;
        match parent.local_name() {
            "Extension" => {
                let Some(id) = parent.attribute("Id") else {
                    self.messaging.error(
                        source_line,
                        GamingError::ExpectedParentWithAttribute {
                            parent: "Extension".into(),
                            attribute: "IsRichSavedGame".into(),
                            parent_attribute: "Id".into(),
                        },
                    );
                    return;
                };
                context.insert(EXTENSION_ID, id.value.clone());

                match attribute.name.local_name.as_str() {
                    "IsRichSavedGame" => {
                        let flag =
                            yes_no_value(&mut self.messaging, source_line, parent.local_name(), attribute);
                        if flag == YesNo::Yes {
                            self.register_rich_saved_game(section, source_line, context);
                        }
                    }
                    _ => self.unexpected_attribute(parent, attribute),
                }
            }
            _ => self.unexpected_element(parent, parent),
        }
    }

    /// Close the compilation: commit `section` if no error was recorded.
    pub fn finish(self, section: IntermediateSection) -> Result<CompilationOutput, CompilationFailure> {
        if self.messaging.encountered_error() {
            let diagnostics = self.messaging.into_diagnostics();
            warn!(
                section = %section.id,
                tuples = section.len(),
                diagnostics = diagnostics.len(),
                "discarding section"
            );
            return Err(CompilationFailure {
                diagnostics,
                discarded: section,
            });
        }

        let warnings = self.messaging.into_diagnostics();
        info!(
            section = %section.id,
            tuples = section.len(),
            warnings = warnings.len(),
            "committed section"
        );
        Ok(CompilationOutput { section, warnings })
    }

    // ── Game ────────────────────────────────────────────────────────

    fn parse_game(&mut self, section: &mut IntermediateSection, node: &Element, file: &FileContext) {
        let source_line = &node.source_line;
        let mut game = GameState {
            instance_id: None,
            roots: TaskRoots::default(),
            ordinals: TaskOrdinals::default(),
        };
        let mut gdf_resource_file = file.file_id.clone();
        let mut executable_file = file.file_id.clone();

        for attribute in &node.attributes {
            if !is_own_attribute(attribute) {
                self.extensions
                    .parse_extension_attribute(&mut self.messaging, section, node, attribute);
                continue;
            }
            match attribute.name.local_name.as_str() {
                "Id" => {
                    game.instance_id = Some(guid_value(&mut self.messaging, source_line, node.local_name(), attribute));
                }
                "GdfResourceFile" => {
                    gdf_resource_file =
                        identifier_value(&mut self.messaging, source_line, node.local_name(), attribute);
                }
                "ExecutableFile" => {
                    executable_file =
                        identifier_value(&mut self.messaging, source_line, node.local_name(), attribute);
                }
                _ => self.unexpected_attribute(node, attribute),
            }
        }

        for child in &node.children {
            if !child.name.is_in_namespace(GAMING_NAMESPACE) {
                self.extensions
                    .parse_extension_element(&mut self.messaging, section, node, child);
                continue;
            }
            let kind = match child.local_name() {
                "PlayTask" => TaskKind::Play,
                "SupportTask" => TaskKind::Support,
                _ => {
                    self.unexpected_element(node, child);
                    continue;
                }
            };

            let instance_id = game.instance_id.as_deref().unwrap_or_default();
            game.roots
                .ensure(&mut self.messaging, section, source_line, instance_id, &file.component_id);
            let ordinal = game.ordinals.next(kind);
            match kind {
                TaskKind::Play => self.parse_play_task(section, child, &executable_file, file, ordinal),
                TaskKind::Support => self.parse_support_task(section, child, &file.component_id, ordinal),
            }
        }

        if game.instance_id.is_none() {
            self.messaging.error(
                source_line,
                GamingError::ExpectedAttribute {
                    element: node.local_name().to_string(),
                    attribute: "Id".into(),
                },
            );
        }

        for referenced in [&gdf_resource_file, &executable_file] {
            if *referenced != file.file_id {
                create_simple_reference(section, source_line, "File", referenced);
            }
        }

        if self.messaging.encountered_error() {
            debug!(source = %source_line, "game registration suppressed by earlier errors");
            return;
        }
        let Some(instance_id) = game.instance_id else {
            return;
        };
        emit(
            section,
            WixGameExplorerTuple {
                source_line: source_line.clone(),
                instance_id,
                file_ref: gdf_resource_file,
            },
        );
        create_simple_reference(section, source_line, "CustomAction", SCHEDULE_GAME_EXPLORER);
    }

    // ── Tasks ───────────────────────────────────────────────────────

    fn parse_play_task(
        &mut self,
        section: &mut IntermediateSection,
        node: &Element,
        executable_file: &str,
        file: &FileContext,
        ordinal: u32,
    ) {
        let source_line = &node.source_line;
        let mut name = None;
        let mut arguments = None;

        for attribute in &node.attributes {
            if !is_own_attribute(attribute) {
                self.extensions
                    .parse_extension_attribute(&mut self.messaging, section, node, attribute);
                continue;
            }
            match attribute.name.local_name.as_str() {
                "Name" => name = Some(value(&mut self.messaging, source_line, node.local_name(), attribute)),
                "Arguments" => {
                    arguments = Some(value(&mut self.messaging, source_line, node.local_name(), attribute))
                }
                _ => self.unexpected_attribute(node, attribute),
            }
        }
        self.parse_task_children(section, node);

        let name = self.require(node, "Name", name);
        if self.messaging.encountered_error() {
            return;
        }
        let Some(name) = name else {
            return;
        };

        let directory_id = create_task_directory(
            &mut self.messaging,
            section,
            source_line,
            &file.component_id,
            TaskKind::Play,
            ordinal,
        );
        let short_name = (!is_valid_short_filename(&name, false))
            .then(|| create_short_name(&name, true, false, &[&directory_id, &name]));

        emit(
            section,
            ShortcutTuple {
                source_line: source_line.clone(),
                id: directory_id.clone(),
                directory_ref: directory_id,
                name,
                short_name,
                component_ref: file.component_id.clone(),
                target: format!("[#{}]", executable_file),
                arguments,
                working_directory: file.directory_id.clone(),
            },
        );
    }

    fn parse_support_task(
        &mut self,
        section: &mut IntermediateSection,
        node: &Element,
        component_id: &str,
        ordinal: u32,
    ) {
        let source_line = &node.source_line;
        let mut name = None;
        let mut address = None;

        for attribute in &node.attributes {
            if !is_own_attribute(attribute) {
                self.extensions
                    .parse_extension_attribute(&mut self.messaging, section, node, attribute);
                continue;
            }
            match attribute.name.local_name.as_str() {
                "Name" => name = Some(value(&mut self.messaging, source_line, node.local_name(), attribute)),
                "Address" => {
                    address = Some(value(&mut self.messaging, source_line, node.local_name(), attribute))
                }
                _ => self.unexpected_attribute(node, attribute),
            }
        }
        self.parse_task_children(section, node);

        let name = self.require(node, "Name", name);
        let address = self.require(node, "Address", address);
        if self.messaging.encountered_error() {
            return;
        }
        let (Some(name), Some(address)) = (name, address) else {
            return;
        };

        let directory_id = create_task_directory(
            &mut self.messaging,
            section,
            source_line,
            component_id,
            TaskKind::Support,
            ordinal,
        );

        // One shortcut per task directory, so the directory id doubles as
        // the shortcut id.
        let link = SupportLink {
            source_line,
            component_id,
            directory_id: &directory_id,
            shortcut_id: &directory_id,
            name: &name,
            address: &address,
        };
        match self.support_links.as_mut() {
            Some(emitter) => {
                if let Err(e) = emitter.emit_support_link(section, &link) {
                    self.messaging.error(
                        source_line,
                        GamingError::SupportLinkFailed {
                            directory_id: directory_id.clone(),
                            reason: e.to_string(),
                        },
                    );
                }
            }
            None => self.messaging.error(
                source_line,
                GamingError::UnimplementedSupportTaskLink {
                    name: name.clone(),
                    directory_id: directory_id.clone(),
                },
            ),
        }
    }

    /// Task elements hold no gaming children; foreign ones go to the host.
    fn parse_task_children(&mut self, section: &mut IntermediateSection, node: &Element) {
        for child in &node.children {
            match child.name.namespace() {
                None | Some(GAMING_NAMESPACE) => self.unexpected_element(node, child),
                Some(_) => {
                    self.extensions
                        .parse_extension_element(&mut self.messaging, section, node, child)
                }
            }
        }
    }

    // ── Rich saved games ────────────────────────────────────────────

    fn register_rich_saved_game(
        &mut self,
        section: &mut IntermediateSection,
        source_line: &SourceLineNumber,
        context: &ContextValues,
    ) {
        let prog_id = context.get(PROG_ID);
        let component_id = context.get(COMPONENT_ID);
        let extension_id = context.get(EXTENSION_ID);

        let (Some(prog_id), Some(component_id), Some(extension_id)) = (prog_id, component_id, extension_id)
        else {
            self.messaging.error(
                source_line,
                GamingError::ExpectedParentWithAttribute {
                    parent: "Extension".into(),
                    attribute: "IsRichSavedGame".into(),
                    parent_attribute: "ProgId".into(),
                },
            );
            return;
        };

        if self.messaging.encountered_error() {
            return;
        }
        RichSavedGame {
            prog_id: prog_id.to_string(),
            component_id: component_id.to_string(),
            extension_id: extension_id.to_string(),
        }
        .register(section, source_line);
    }

    // ── Diagnostics ─────────────────────────────────────────────────

    fn require(&mut self, node: &Element, attribute: &str, value: Option<String>) -> Option<String> {
        if value.is_none() {
            self.messaging.error(
                &node.source_line,
                GamingError::ExpectedAttribute {
                    element: node.local_name().to_string(),
                    attribute: attribute.to_string(),
                },
            );
        }
        value
    }

    fn unexpected_attribute(&mut self, element: &Element, attribute: &Attribute) {
        self.messaging.error(
            &element.source_line,
            GamingError::UnexpectedAttribute {
                element: element.local_name().to_string(),
                attribute: attribute.name.local_name.clone(),
            },
        );
    }

    fn unexpected_element(&mut self, parent: &Element, child: &Element) {
        self.messaging.error(
            &child.source_line,
            GamingError::UnexpectedElement {
                parent: parent.local_name().to_string(),
                child: child.local_name().to_string(),
            },
        );
    }
}

/// Un-namespaced attributes belong to the element's own namespace.
fn is_own_attribute(attribute: &Attribute) -> bool {
    matches!(attribute.name.namespace(), None | Some(GAMING_NAMESPACE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DIRECTORY_ID, FILE_ID};
    use crate::error::ErrorKind;
    use gaming_types::QName;

    const GAME_ID: &str = "{12345678-1234-5678-90AB-1234567890AB}";

    fn file_context() -> ContextValues {
        ContextValues::new()
            .with(FILE_ID, "GameExe")
            .with(COMPONENT_ID, "GameComp")
            .with(DIRECTORY_ID, "INSTALLFOLDER")
    }

    fn file() -> Element {
        Element::local("File").at(SourceLineNumber::new("game.wxs", 10))
    }

    fn game() -> Element {
        Element::gaming("Game")
            .at(SourceLineNumber::new("game.wxs", 11))
            .with_attribute("Id", GAME_ID)
    }

    fn play(name: &str) -> Element {
        Element::gaming("PlayTask").with_attribute("Name", name)
    }

    fn foreign(local: &str) -> QName {
        QName::qualified("http://example.com/other", local)
    }

    fn compile(element: &Element) -> (GamingCompiler, IntermediateSection) {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        compiler.parse_element(&mut section, &file(), element, &file_context());
        (compiler, section)
    }

    fn kinds(compiler: &GamingCompiler) -> Vec<ErrorKind> {
        compiler
            .messaging()
            .diagnostics()
            .iter()
            .map(|d| d.error.kind())
            .collect()
    }

    #[test]
    fn test_game_without_tasks() {
        let (compiler, section) = compile(&game());
        let output = compiler.finish(section).unwrap();

        let registration = output.section.game_explorers().next().unwrap();
        assert_eq!(registration.instance_id, GAME_ID);
        assert_eq!(registration.file_ref, "GameExe");
        assert_eq!(output.section.directories().count(), 0);
        assert_eq!(output.section.custom_actions().count(), 0);

        let reference = output.section.simple_references().next().unwrap();
        assert_eq!(reference.table, "CustomAction");
        assert_eq!(reference.primary_keys, SCHEDULE_GAME_EXPLORER);
    }

    #[test]
    fn test_gdf_resource_file_is_referenced() {
        let (compiler, section) = compile(&game().with_attribute("GdfResourceFile", "GameGdf"));
        let output = compiler.finish(section).unwrap();

        assert_eq!(output.section.game_explorers().next().unwrap().file_ref, "GameGdf");
        let files: Vec<_> = output
            .section
            .simple_references()
            .filter(|r| r.table == "File")
            .map(|r| r.primary_keys.as_str())
            .collect();
        assert_eq!(files, ["GameGdf"]);
    }

    #[test]
    fn test_play_task_shortcut() {
        let (compiler, section) = compile(&game().with_child(play("Play").with_attribute("Arguments", "-safe")));
        let output = compiler.finish(section).unwrap();

        let shortcut = output.section.shortcuts().next().unwrap();
        assert_eq!(shortcut.id, "WixPlayTask0_GameComp");
        assert_eq!(shortcut.directory_ref, "WixPlayTask0_GameComp");
        assert_eq!(shortcut.short_name, None);
        assert_eq!(shortcut.target, "[#GameExe]");
        assert_eq!(shortcut.arguments.as_deref(), Some("-safe"));
        assert_eq!(shortcut.working_directory, "INSTALLFOLDER");
        assert_eq!(output.section.directories().count(), 3);
    }

    #[test]
    fn test_long_task_name_gets_short_name() {
        let (compiler, section) = compile(&game().with_child(play("Play the whole campaign")));
        let output = compiler.finish(section).unwrap();

        let shortcut = output.section.shortcuts().next().unwrap();
        let short = shortcut.short_name.as_deref().unwrap();
        assert!(is_valid_short_filename(short, false));
        assert_eq!(shortcut.filename(), format!("{}|Play the whole campaign", short));
    }

    #[test]
    fn test_executable_file_is_shortcut_target() {
        let (compiler, section) = compile(
            &game()
                .with_attribute("ExecutableFile", "Launcher")
                .with_child(play("Play")),
        );
        let output = compiler.finish(section).unwrap();

        assert_eq!(output.section.shortcuts().next().unwrap().target, "[#Launcher]");
        assert_eq!(output.section.game_explorers().next().unwrap().file_ref, "GameExe");
    }

    #[test]
    fn test_missing_id_suppresses_registration() {
        let node = Element::gaming("Game").with_child(play("Play"));
        let (compiler, section) = compile(&node);

        assert_eq!(kinds(&compiler), [ErrorKind::MissingRequiredAttribute]);
        // The task was built before the missing Id was noticed.
        assert_eq!(section.directories().count(), 3);
        assert_eq!(section.shortcuts().count(), 1);
        assert_eq!(section.game_explorers().count(), 0);
        // Root paths are built with an empty instance id.
        let first = section.custom_actions().next().unwrap();
        assert!(first.target.ends_with("GameExplorer\\\\PlayTasks\\"));

        let failure = compiler.finish(section).unwrap_err();
        assert_eq!(failure.errors().count(), 1);
        assert!(failure.to_string().contains("'test'"));
    }

    #[test]
    fn test_unexpected_attribute_and_child() {
        let node = game()
            .with_attribute("Genre", "Puzzle")
            .with_child(Element::gaming("Rating"));
        let (compiler, _) = compile(&node);

        let errors: Vec<_> = compiler.messaging().diagnostics().iter().map(|d| &d.error).collect();
        assert!(matches!(errors[0], GamingError::UnexpectedAttribute { attribute, .. } if attribute == "Genre"));
        assert!(matches!(errors[1], GamingError::UnexpectedElement { child, .. } if child == "Rating"));
    }

    #[test]
    fn test_foreign_nodes_go_to_host() {
        let node = game()
            .with_qualified_attribute(foreign("Tag"), "x")
            .with_child(Element::new(foreign("Note")));
        let (compiler, _) = compile(&node);

        assert!(matches!(
            compiler.messaging().diagnostics()[0].error,
            GamingError::UnsupportedExtensionAttribute { .. }
        ));
        assert!(matches!(
            compiler.messaging().diagnostics()[1].error,
            GamingError::UnsupportedExtensionElement { .. }
        ));
    }

    #[test]
    fn test_game_outside_file_is_unexpected() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        compiler.parse_element(&mut section, &Element::local("Component"), &game(), &file_context());

        assert_eq!(kinds(&compiler), [ErrorKind::UnexpectedAttributeOrElement]);
        assert!(section.is_empty());
    }

    #[test]
    fn test_missing_file_context() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        compiler.parse_element(&mut section, &file(), &game(), &ContextValues::new());

        assert_eq!(compiler.messaging().error_count(), 3);
        assert!(section.is_empty());
    }

    #[test]
    fn test_unknown_element_under_file_skips_context() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        compiler.parse_element(&mut section, &file(), &Element::gaming("Rating"), &ContextValues::new());

        assert!(matches!(
            compiler.messaging().diagnostics(),
            [Diagnostic { error: GamingError::UnexpectedElement { parent, child }, .. }]
                if parent == "File" && child == "Rating"
        ));
        assert!(section.is_empty());
    }

    #[test]
    fn test_play_task_requires_name() {
        let (compiler, section) = compile(&game().with_child(Element::gaming("PlayTask")));

        assert!(matches!(
            compiler.messaging().diagnostics(),
            [Diagnostic { error: GamingError::ExpectedAttribute { element, attribute }, .. }]
                if element == "PlayTask" && attribute == "Name"
        ));
        assert_eq!(section.shortcuts().count(), 0);
        assert_eq!(section.game_explorers().count(), 0);
        assert!(compiler.finish(section).is_err());
    }

    #[test]
    fn test_unknown_task_attribute_is_unexpected() {
        let (compiler, section) = compile(&game().with_child(play("Play").with_attribute("Icon", "x")));

        assert!(matches!(
            &compiler.messaging().diagnostics()[0].error,
            GamingError::UnexpectedAttribute { element, attribute } if element == "PlayTask" && attribute == "Icon"
        ));
        assert_eq!(section.game_explorers().count(), 0);

        let node = game().with_child(
            Element::gaming("SupportTask")
                .with_attribute("Name", "Website")
                .with_attribute("Address", "https://example.com")
                .with_attribute("Icon", "x"),
        );
        let (compiler, _) = compile(&node);
        assert_eq!(kinds(&compiler)[0], ErrorKind::UnexpectedAttributeOrElement);
    }

    #[test]
    fn test_support_task_without_emitter_fails_loudly() {
        let node = game().with_child(
            Element::gaming("SupportTask")
                .with_attribute("Name", "Website")
                .with_attribute("Address", "https://example.com"),
        );
        let (compiler, section) = compile(&node);

        assert_eq!(kinds(&compiler), [ErrorKind::UnimplementedFeature]);
        assert_eq!(section.game_explorers().count(), 0);
        assert!(compiler.finish(section).is_err());
    }

    #[test]
    fn test_support_task_requires_address() {
        let node = game().with_child(Element::gaming("SupportTask").with_attribute("Name", "Website"));
        let (compiler, _) = compile(&node);

        assert!(matches!(
            &compiler.messaging().diagnostics()[0].error,
            GamingError::ExpectedAttribute { attribute, .. } if attribute == "Address"
        ));
    }

    #[test]
    fn test_rich_saved_game_registers_four_values() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        let extension = Element::local("Extension").with_attribute("Id", "sav");
        let mut context = ContextValues::new()
            .with(PROG_ID, "MyGame.Save")
            .with(COMPONENT_ID, "GameComp");

        compiler.parse_attribute(
            &mut section,
            &extension,
            &Attribute::new(QName::gaming("IsRichSavedGame"), "yes"),
            &mut context,
        );

        assert_eq!(context.get(EXTENSION_ID), Some("sav"));
        assert_eq!(section.registry_values().count(), 4);
        assert!(compiler.finish(section).is_ok());
    }

    #[test]
    fn test_rich_saved_game_no_is_a_no_op() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        let extension = Element::local("Extension").with_attribute("Id", "sav");

        compiler.parse_attribute(
            &mut section,
            &extension,
            &Attribute::local("IsRichSavedGame", "no"),
            &mut ContextValues::new(),
        );
        assert!(section.is_empty());
        assert!(!compiler.messaging().encountered_error());
    }

    #[test]
    fn test_rich_saved_game_needs_extension_id() {
        let mut compiler = GamingCompiler::default();
        let mut section = IntermediateSection::new("test");
        let mut context = ContextValues::new().with(PROG_ID, "MyGame.Save");

        compiler.parse_attribute(
            &mut section,
            &Element::local("Extension"),
            &Attribute::local("IsRichSavedGame", "yes"),
            &mut context,
        );

        assert!(matches!(
            &compiler.messaging().diagnostics()[0].error,
            GamingError::ExpectedParentWithAttribute { parent_attribute, .. } if parent_attribute == "Id"
        ));
        assert_eq!(context.get(EXTENSION_ID), None);
    }
}
