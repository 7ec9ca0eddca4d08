use serde::{Deserialize, Serialize};

/// Coarse drag-and-drop capability of a list, derived from [`DndConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDropMode {
    Disabled,
    ReorderOnly,
    FullDragDrop,
}

impl DragDropMode {
    pub fn can_start_drag(self) -> bool {
        self != DragDropMode::Disabled
    }

    /// Whether drags that did not start in this list are looked at at all.
    pub fn accepts_foreign_drops(self) -> bool {
        self == DragDropMode::FullDragDrop
    }
}

/// Drag-and-drop policy of a list.
///
/// The three toggles are the only stored state. [`DndConfig::mode`] is recomputed from them on
/// every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndConfig {
    pub allow_reorder: bool,
    pub allow_inter_widget_transfer: bool,
    pub allow_external_file_drop: bool,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            allow_reorder: true,
            allow_inter_widget_transfer: false,
            allow_external_file_drop: false,
        }
    }
}

impl DndConfig {
    pub fn disabled() -> Self {
        Self {
            allow_reorder: false,
            allow_inter_widget_transfer: false,
            allow_external_file_drop: false,
        }
    }

    pub fn set_reorder_enabled(&mut self, enabled: bool) {
        self.allow_reorder = enabled;
    }

    pub fn set_inter_widget_transfer_enabled(&mut self, enabled: bool) {
        self.allow_inter_widget_transfer = enabled;
    }

    pub fn set_external_file_drop_enabled(&mut self, enabled: bool) {
        self.allow_external_file_drop = enabled;
    }

    pub fn mode(&self) -> DragDropMode {
        let foreign = self.allow_inter_widget_transfer || self.allow_external_file_drop;
        match (self.allow_reorder, foreign) {
            (false, false) => DragDropMode::Disabled,
            (true, false) => DragDropMode::ReorderOnly,
            _ => DragDropMode::FullDragDrop,
        }
    }
}

/// Which gestures start an in-place rename.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditTriggers {
    pub double_click: bool,
    pub edit_key: bool,
}

impl EditTriggers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set_name_editing(&mut self, enabled: bool) {
        self.double_click = enabled;
        self.edit_key = enabled;
    }

    pub fn any(&self) -> bool {
        self.double_click || self.edit_key
    }
}
