//! Rich saved-game preview registration for a file extension.

use gaming_types::{IntermediateSection, RegistryRoot, SourceLineNumber};

use crate::rows::create_registry_row;

/// Shell preview handler class registered for rich saved-game files.
pub const RICH_PREVIEW_HANDLER: &str = "{4E5BFBF8-F59A-4E87-9805-1F9B42CC254A}";
/// Property handler that exposes the `System.Game.Rich*` properties.
pub const RICH_PROPERTY_HANDLER: &str = "{ECDD6472-2B9B-4B4B-AE36-F316DF3C8D60}";
/// `IExtractImage` handler slot under the extension key.
const EXTRACT_IMAGE_SHELLEX: &str = "{BB2E617C-0920-11D1-9A0B-00C04FC2D6C1}";

const PREVIEW_TITLE: &str = "prop:System.Game.RichSaveName;System.Game.RichApplicationName";
const PREVIEW_DETAILS: &str =
    "prop:System.Game.RichLevel;System.DateChanged;System.Game.RichComment;System.DisplayName;System.DisplayType";

/// Identifiers the registration hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichSavedGame {
    pub prog_id: String,
    pub component_id: String,
    /// File extension without the leading dot.
    pub extension_id: String,
}

impl RichSavedGame {
    /// Emit the four registry values and return their ids.
    pub fn register(
        &self,
        section: &mut IntermediateSection,
        source_line: &SourceLineNumber,
    ) -> [String; 4] {
        let Self {
            prog_id,
            component_id,
            extension_id,
        } = self;

        let title = create_registry_row(
            section,
            source_line,
            RegistryRoot::ClassesRoot,
            prog_id,
            Some("PreviewTitle"),
            PREVIEW_TITLE,
            component_id,
        );
        let details = create_registry_row(
            section,
            source_line,
            RegistryRoot::ClassesRoot,
            prog_id,
            Some("PreviewDetails"),
            PREVIEW_DETAILS,
            component_id,
        );
        let thumbnail = create_registry_row(
            section,
            source_line,
            RegistryRoot::ClassesRoot,
            &format!(".{}\\{}", extension_id, EXTRACT_IMAGE_SHELLEX),
            None,
            RICH_PREVIEW_HANDLER,
            component_id,
        );
        let property_handler = create_registry_row(
            section,
            source_line,
            RegistryRoot::LocalMachine,
            &format!(
                "Software\\Microsoft\\Windows\\CurrentVersion\\PropertySystem\\PropertyHandlers\\.{}",
                extension_id
            ),
            None,
            RICH_PROPERTY_HANDLER,
            component_id,
        );

        [title, details, thumbnail, property_handler]
    }
}
