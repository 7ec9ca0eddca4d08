use std::{
    cell::{Cell, OnceCell},
    ops::BitOr,
    path::PathBuf,
    rc::Rc,
};

use crate::config::DndConfig;

/// Identity of a list widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl From<u64> for ListId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Actions a drag source offers to the drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropActions(u8);

impl DropActions {
    pub const NONE: Self = Self(0);
    pub const COPY: Self = Self(1);
    pub const MOVE: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl BitOr for DropActions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropCategory {
    /// Reordering rows within the same list.
    IntraWidget,
    /// Rows coming from another list.
    InterWidget,
    /// File paths coming from outside, usually the file manager.
    ExternalFile,
}

struct DragContents<I> {
    rows: Vec<usize>,
    items: Vec<I>,
}

/// Payload of a drag that started in a list.
///
/// The rows and items are written once, when the gesture actually starts. The `taken` flag is
/// shared between every clone, so the receiving list can tell the source that its rows were
/// moved away.
pub struct ListDrag<I> {
    source: ListId,
    actions: DropActions,
    contents: Rc<OnceCell<DragContents<I>>>,
    taken: Rc<Cell<bool>>,
}

impl<I> Clone for ListDrag<I> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            actions: self.actions,
            contents: Rc::clone(&self.contents),
            taken: Rc::clone(&self.taken),
        }
    }
}

impl<I> ListDrag<I> {
    pub fn new(source: ListId, actions: DropActions) -> Self {
        Self {
            source,
            actions,
            contents: Rc::new(OnceCell::new()),
            taken: Rc::new(Cell::new(false)),
        }
    }

    pub fn source(&self) -> ListId {
        self.source
    }

    pub fn actions(&self) -> DropActions {
        self.actions
    }

    /// Returns `false` if the drag was already filled by an earlier call.
    pub(crate) fn fill(&self, rows: Vec<usize>, items: Vec<I>) -> bool {
        self.contents.set(DragContents { rows, items }).is_ok()
    }

    pub fn rows(&self) -> &[usize] {
        self.contents.get().map(|c| c.rows.as_slice()).unwrap_or(&[])
    }

    pub fn items(&self) -> &[I] {
        self.contents.get().map(|c| c.items.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub(crate) fn mark_taken(&self) {
        self.taken.set(true);
    }

    pub fn was_taken(&self) -> bool {
        self.taken.get()
    }
}

pub enum DragPayload<'a, I> {
    Rows(&'a ListDrag<I>),
    Files(&'a [PathBuf]),
}

impl<I> Clone for DragPayload<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for DragPayload<'_, I> {}

impl<I> DragPayload<'_, I> {
    pub fn has_file_paths(&self) -> bool {
        matches!(self, DragPayload::Files(paths) if !paths.is_empty())
    }

    pub fn len(&self) -> usize {
        match self {
            DragPayload::Rows(drag) => drag.len(),
            DragPayload::Files(paths) => paths.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A drag or drop notification as seen by a list.
pub struct DragEvent<'a, I> {
    origin: Option<ListId>,
    payload: DragPayload<'a, I>,
    possible_actions: DropActions,
}

impl<I> Clone for DragEvent<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for DragEvent<'_, I> {}

impl<'a, I> DragEvent<'a, I> {
    pub fn from_list(drag: &'a ListDrag<I>) -> Self {
        Self {
            origin: Some(drag.source),
            payload: DragPayload::Rows(drag),
            possible_actions: drag.actions,
        }
    }

    /// File paths dragged in from outside the application.
    pub fn external_files(paths: &'a [PathBuf]) -> Self {
        Self {
            origin: None,
            payload: DragPayload::Files(paths),
            possible_actions: DropActions::COPY,
        }
    }

    pub fn with_origin(mut self, origin: Option<ListId>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_actions(mut self, actions: DropActions) -> Self {
        self.possible_actions = actions;
        self
    }

    pub fn origin(&self) -> Option<ListId> {
        self.origin
    }

    pub fn payload(&self) -> DragPayload<'a, I> {
        self.payload
    }

    pub fn possible_actions(&self) -> DropActions {
        self.possible_actions
    }
}

pub fn classify<I>(event: &DragEvent<'_, I>, this: ListId) -> DropCategory {
    if event.origin == Some(this) {
        DropCategory::IntraWidget
    } else if event.payload.has_file_paths() {
        DropCategory::ExternalFile
    } else {
        DropCategory::InterWidget
    }
}

pub fn is_acceptable<I>(config: &DndConfig, event: &DragEvent<'_, I>, this: ListId) -> bool {
    let can_move = event.possible_actions.contains(DropActions::MOVE);
    match classify(event, this) {
        DropCategory::IntraWidget => config.allow_reorder && can_move,
        DropCategory::InterWidget => config.allow_inter_widget_transfer && can_move,
        DropCategory::ExternalFile => config.allow_external_file_drop,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPlace {
    Before,
    After,
}

/// Where the cursor is relative to the rows of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Row { row: usize, place: DropPlace },
    /// Below the last row.
    End,
}

impl DropPosition {
    /// The insertion gap (`0..=len`) this position points at.
    pub fn insertion_row(self, len: usize) -> usize {
        match self {
            DropPosition::Row {
                row,
                place: DropPlace::Before,
            } => row.min(len),
            DropPosition::Row {
                row,
                place: DropPlace::After,
            } => row.saturating_add(1).min(len),
            DropPosition::End => len,
        }
    }
}
