mod config;
mod controller;
mod dnd;
mod list;
mod model;
mod selection;

pub use config::{DndConfig, DragDropMode, EditTriggers};
pub use controller::{
    DragListController, DragResponse, DropIndicator, DropOutcome, ItemsPlaced, Reconciliation,
};
pub use dnd::{
    DragEvent, DragPayload, DropActions, DropCategory, DropPlace, DropPosition, ListDrag, ListId,
    classify, is_acceptable,
};
pub use list::{
    EditableDragList, EditableDragListEvent, EditableDragListRowState, EditableDragListState,
    RenameSelected, editable_drag_list, init,
};
pub use model::{DropResult, DropResultProvider, DropTargetModel, EditableListItem, ListModel};
pub use selection::Selection;
