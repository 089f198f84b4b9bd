//! Game Explorer task directories.
//!
//! Game Explorer expects one directory per task, each holding exactly one
//! shortcut, under per-game `PlayTasks` and `SupportTasks` roots:
//!
//! ```text
//!  WixPlayTasksRoot_MyGameExeComp     (PlayTasks, set by custom action)
//!  -- WixPlayTask0_MyGameExeComp      (primary task)
//!  -- WixPlayTask1_MyGameExeComp      (some other play task)
//!  WixSupportTasksRoot_MyGameExeComp  (SupportTasks, set by custom action)
//!  -- WixSupportTask0_MyGameExeComp   (first support task)
//! ```
//!
//! The roots are placeholders under `TARGETDIR`; immediate custom actions
//! point them at the game's folder under `CommonAppDataFolder` at install
//! time.

use gaming_types::{
    CustomActionExecution, CustomActionTuple, CustomActionType, DirectoryTuple,
    IntermediateSection, SequenceTable, SourceLineNumber, WixActionTuple,
};

use crate::error::GamingError;
use crate::identifiers::synthesize;
use crate::messaging::Messaging;
use crate::rows::emit;

/// Top-level directory the task roots hang under.
pub const TARGET_DIR: &str = "TARGETDIR";
/// Action the root-setting custom actions are anchored to.
pub const COST_FINALIZE: &str = "CostFinalize";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Runs the game executable with optional arguments.
    Play,
    /// URL shortcut.
    Support,
}

impl TaskKind {
    pub fn root_prefix(self) -> &'static str {
        match self {
            Self::Play => "WixPlayTasksRoot",
            Self::Support => "WixSupportTasksRoot",
        }
    }

    pub fn task_prefix(self) -> &'static str {
        match self {
            Self::Play => "WixPlayTask",
            Self::Support => "WixSupportTask",
        }
    }

    /// Folder name under the game's Game Explorer directory.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Play => "PlayTasks\\",
            Self::Support => "SupportTasks\\",
        }
    }
}

/// Per-kind running ordinals, each counting from zero in document order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskOrdinals {
    play: u32,
    support: u32,
}

impl TaskOrdinals {
    /// Hand out the next ordinal for `kind`.
    pub fn next(&mut self, kind: TaskKind) -> u32 {
        let counter = match kind {
            TaskKind::Play => &mut self.play,
            TaskKind::Support => &mut self.support,
        };
        let ordinal = *counter;
        *counter += 1;
        ordinal
    }
}

/// Whether a game's task roots have been emitted yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TaskRoots {
    #[default]
    NoTasksSeen,
    RootsEmitted,
}

impl TaskRoots {
    /// Emit the roots on the first call for a game; later calls do nothing.
    pub fn ensure(
        &mut self,
        messaging: &mut Messaging,
        section: &mut IntermediateSection,
        source_line: &SourceLineNumber,
        game_id: &str,
        component_id: &str,
    ) {
        if *self == Self::NoTasksSeen {
            create_task_root_directories(messaging, section, source_line, game_id, component_id);
            *self = Self::RootsEmitted;
        }
    }
}

/// Synthesize a task directory id, reporting a rejected one but still
/// returning it so later diagnostics can refer to it.
pub fn task_directory_id(
    messaging: &mut Messaging,
    source_line: &SourceLineNumber,
    prefix: &str,
    component_id: &str,
) -> String {
    match synthesize(prefix, component_id) {
        Ok(id) => id,
        Err(rejected) => {
            messaging.error(
                source_line,
                GamingError::IllegalGameTaskDirectoryIdentifier {
                    identifier: rejected.identifier.clone(),
                    violation: rejected.violation,
                },
            );
            rejected.identifier
        }
    }
}

/// Create the numbered directory a task's shortcut lives in and return its id.
pub fn create_task_directory(
    messaging: &mut Messaging,
    section: &mut IntermediateSection,
    source_line: &SourceLineNumber,
    component_id: &str,
    kind: TaskKind,
    ordinal: u32,
) -> String {
    let parent_id = task_directory_id(messaging, source_line, kind.root_prefix(), component_id);
    let prefix = format!("{}{}", kind.task_prefix(), ordinal);
    let id = task_directory_id(messaging, source_line, &prefix, component_id);

    emit(
        section,
        DirectoryTuple {
            source_line: source_line.clone(),
            id: id.clone(),
            parent_ref: parent_id,
            name: ordinal.to_string(),
        },
    );
    id
}

/// Create both placeholder roots and the custom actions that set them.
pub fn create_task_root_directories(
    messaging: &mut Messaging,
    section: &mut IntermediateSection,
    source_line: &SourceLineNumber,
    game_id: &str,
    component_id: &str,
) {
    let kinds = [TaskKind::Play, TaskKind::Support];
    let root_ids = kinds.map(|kind| {
        task_directory_id(messaging, source_line, kind.root_prefix(), component_id)
    });
    let root_path = format!(
        "[CommonAppDataFolder]Microsoft\\Windows\\GameExplorer\\{}\\",
        game_id
    );

    for root_id in &root_ids {
        emit(
            section,
            DirectoryTuple {
                source_line: source_line.clone(),
                id: root_id.clone(),
                parent_ref: TARGET_DIR.to_string(),
                name: ".".to_string(),
            },
        );
    }

    for (kind, root_id) in kinds.into_iter().zip(root_ids) {
        emit(
            section,
            CustomActionTuple {
                source_line: source_line.clone(),
                id: root_id.clone(),
                action_type: CustomActionType::SetProperty,
                execution: CustomActionExecution::Immediate,
                source: root_id.clone(),
                target: format!("{}{}", root_path, kind.folder()),
            },
        );
        emit(
            section,
            WixActionTuple {
                source_line: source_line.clone(),
                sequence_table: SequenceTable::InstallExecuteSequence,
                action: root_id,
                condition: None,
                before: None,
                after: Some(COST_FINALIZE.to_string()),
            },
        );
    }
}
