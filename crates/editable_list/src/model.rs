use std::{path::Path, rc::Rc};

use gpui::SharedString;

use crate::dnd::{DragPayload, DropCategory};

/// What the most recent successful drop put where.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropResult {
    pub was_dropped: bool,
    pub destination_row: usize,
    pub item_count: usize,
}

impl DropResult {
    pub fn placed(destination_row: usize, item_count: usize) -> Self {
        Self {
            was_dropped: true,
            destination_row,
            item_count,
        }
    }
}

/// Single-slot mailbox between a model and the list showing it.
///
/// The model writes it when a drop lands and the list reads and clears it once it has rebuilt
/// its selection.
pub trait DropResultProvider {
    fn drop_result(&self) -> DropResult;
    fn clear_drop_result(&mut self);
}

/// Data source of an editable drag list.
pub trait DropTargetModel {
    type Item: Clone;

    fn items(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `row` is an insertion gap in `0..=len`.
    fn can_accept_drop(
        &self,
        row: usize,
        category: DropCategory,
        payload: DragPayload<'_, Self::Item>,
    ) -> bool;

    /// Moves or inserts the payload at `row` and records a [`DropResult`].
    fn perform_drop(
        &mut self,
        row: usize,
        category: DropCategory,
        payload: DragPayload<'_, Self::Item>,
    ) -> bool;

    /// `rows` must be sorted ascending.
    fn remove_rows(&mut self, rows: &[usize]);

    /// Disabled rows can be neither selected nor dragged.
    fn is_row_enabled(&self, _row: usize) -> bool {
        true
    }

    fn rename(&mut self, _row: usize, _label: SharedString) -> bool {
        false
    }

    fn drop_result_provider(&mut self) -> Option<&mut dyn DropResultProvider> {
        None
    }
}

/// A single item in a [`ListModel`].
#[derive(Clone, Debug)]
pub struct EditableListItem<T> {
    pub id: SharedString,
    pub label: SharedString,
    pub data: T,
    disabled: bool,
}

impl<T> EditableListItem<T> {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

type PathFactory<T> = Rc<dyn Fn(&Path) -> Option<EditableListItem<T>>>;

/// Vec-backed model with drop result tracking.
pub struct ListModel<T> {
    items: Vec<EditableListItem<T>>,
    from_path: Option<PathFactory<T>>,
    drop_result: DropResult,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            from_path: None,
            drop_result: DropResult::default(),
        }
    }
}

impl<T: Clone> ListModel<T> {
    pub fn new(items: impl Into<Vec<EditableListItem<T>>>) -> Self {
        Self {
            items: items.into(),
            ..Self::default()
        }
    }

    /// Turn dropped file paths into items. Paths the factory rejects are skipped.
    pub fn with_path_items(
        mut self,
        from_path: impl Fn(&Path) -> Option<EditableListItem<T>> + 'static,
    ) -> Self {
        self.from_path = Some(Rc::new(from_path));
        self
    }

    pub fn set_path_items(
        &mut self,
        from_path: impl Fn(&Path) -> Option<EditableListItem<T>> + 'static,
    ) {
        self.from_path = Some(Rc::new(from_path));
    }

    pub fn set_items(&mut self, items: impl Into<Vec<EditableListItem<T>>>) {
        self.items = items.into();
        self.drop_result = DropResult::default();
    }

    pub fn get(&self, row: usize) -> Option<&EditableListItem<T>> {
        self.items.get(row)
    }

    fn move_rows(&mut self, rows: &[usize], gap: usize) -> Option<usize> {
        if rows.is_empty() || rows.iter().any(|&row| row >= self.items.len()) {
            return None;
        }

        let mut moved = Vec::with_capacity(rows.len());
        for &row in rows.iter().rev() {
            moved.push(self.items.remove(row));
        }
        moved.reverse();

        let destination = gap - rows.iter().filter(|&&row| row < gap).count();
        self.items.splice(destination..destination, moved);
        Some(destination)
    }
}

impl<T: Clone + 'static> DropTargetModel for ListModel<T> {
    type Item = EditableListItem<T>;

    fn items(&self) -> &[Self::Item] {
        &self.items
    }

    fn can_accept_drop(
        &self,
        row: usize,
        category: DropCategory,
        payload: DragPayload<'_, Self::Item>,
    ) -> bool {
        if row > self.items.len() || payload.is_empty() {
            return false;
        }
        match (category, payload) {
            (DropCategory::ExternalFile, DragPayload::Files(_)) => self.from_path.is_some(),
            (DropCategory::IntraWidget, DragPayload::Rows(drag)) => {
                drag.rows().iter().all(|&r| r < self.items.len())
            }
            (DropCategory::InterWidget, DragPayload::Rows(_)) => true,
            _ => false,
        }
    }

    fn perform_drop(
        &mut self,
        row: usize,
        category: DropCategory,
        payload: DragPayload<'_, Self::Item>,
    ) -> bool {
        if !self.can_accept_drop(row, category, payload) {
            return false;
        }

        let (destination, count) = match payload {
            DragPayload::Rows(drag) if category == DropCategory::IntraWidget => {
                let Some(destination) = self.move_rows(drag.rows(), row) else {
                    return false;
                };
                (destination, drag.rows().len())
            }
            DragPayload::Rows(drag) => {
                self.items.splice(row..row, drag.items().iter().cloned());
                (row, drag.len())
            }
            DragPayload::Files(paths) => {
                let Some(from_path) = self.from_path.clone() else {
                    return false;
                };
                let new_items: Vec<_> = paths
                    .iter()
                    .filter_map(|path| from_path(path.as_path()))
                    .collect();
                if new_items.is_empty() {
                    return false;
                }
                let count = new_items.len();
                self.items.splice(row..row, new_items);
                (row, count)
            }
        };

        self.drop_result = DropResult::placed(destination, count);
        true
    }

    fn remove_rows(&mut self, rows: &[usize]) {
        for &row in rows.iter().rev() {
            if row < self.items.len() {
                self.items.remove(row);
            }
        }
    }

    fn is_row_enabled(&self, row: usize) -> bool {
        self.items.get(row).is_some_and(|item| !item.is_disabled())
    }

    fn rename(&mut self, row: usize, label: SharedString) -> bool {
        match self.items.get_mut(row) {
            Some(item) if !item.is_disabled() => {
                item.label = label;
                true
            }
            _ => false,
        }
    }

    fn drop_result_provider(&mut self) -> Option<&mut dyn DropResultProvider> {
        Some(self)
    }
}

impl<T> DropResultProvider for ListModel<T> {
    fn drop_result(&self) -> DropResult {
        self.drop_result
    }

    fn clear_drop_result(&mut self) {
        self.drop_result.was_dropped = false;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::dnd::{DropActions, ListDrag, ListId};

    fn model(ids: &[&'static str]) -> ListModel<()> {
        ListModel::new(
            ids.iter()
                .map(|id| EditableListItem::new(*id, *id, ()))
                .collect::<Vec<_>>(),
        )
    }

    fn ids(model: &ListModel<()>) -> Vec<String> {
        model.items().iter().map(|i| i.id.to_string()).collect()
    }

    fn drag_rows(model: &ListModel<()>, rows: &[usize]) -> ListDrag<EditableListItem<()>> {
        let drag = ListDrag::new(ListId::from(1), DropActions::MOVE);
        let items = rows.iter().map(|&r| model.items()[r].clone()).collect();
        drag.fill(rows.to_vec(), items);
        drag
    }

    #[test]
    fn move_single_row_down() {
        let mut model = model(&["A", "B", "C", "D", "E"]);
        let drag = drag_rows(&model, &[0]);
        assert!(model.perform_drop(4, DropCategory::IntraWidget, DragPayload::Rows(&drag)));
        assert_eq!(ids(&model), ["B", "C", "D", "A", "E"]);
        assert_eq!(model.drop_result(), DropResult::placed(3, 1));
    }

    #[test]
    fn move_scattered_rows_up() {
        let mut model = model(&["A", "B", "C", "D", "E"]);
        let drag = drag_rows(&model, &[1, 3]);
        assert!(model.perform_drop(0, DropCategory::IntraWidget, DragPayload::Rows(&drag)));
        assert_eq!(ids(&model), ["B", "D", "A", "C", "E"]);
        assert_eq!(model.drop_result(), DropResult::placed(0, 2));
    }

    #[test]
    fn move_onto_own_gap_keeps_order() {
        let mut model = model(&["A", "B", "C"]);
        let drag = drag_rows(&model, &[1]);
        for gap in [1, 2] {
            assert!(model.perform_drop(gap, DropCategory::IntraWidget, DragPayload::Rows(&drag)));
            assert_eq!(ids(&model), ["A", "B", "C"]);
            assert_eq!(model.drop_result(), DropResult::placed(1, 1));
        }
    }

    #[test]
    fn transfer_inserts_copies() {
        let source = model(&["X", "Y"]);
        let mut target = model(&["A", "B"]);
        let drag = drag_rows(&source, &[0, 1]);
        assert!(target.perform_drop(1, DropCategory::InterWidget, DragPayload::Rows(&drag)));
        assert_eq!(ids(&target), ["A", "X", "Y", "B"]);
        assert_eq!(target.drop_result(), DropResult::placed(1, 2));
    }

    #[test]
    fn files_need_a_factory() {
        let paths = vec![PathBuf::from("/maps/e1m1.wad"), PathBuf::from("/maps/readme")];
        let mut plain = model(&[]);
        assert!(!plain.can_accept_drop(0, DropCategory::ExternalFile, DragPayload::Files(&paths)));

        let mut model = model(&[]).with_path_items(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            name.ends_with(".wad")
                .then(|| EditableListItem::new(path.display().to_string(), name, ()))
        });
        assert!(model.perform_drop(0, DropCategory::ExternalFile, DragPayload::Files(&paths)));
        assert_eq!(ids(&model), ["/maps/e1m1.wad"]);
        assert_eq!(model.drop_result(), DropResult::placed(0, 1));

        assert!(!plain.perform_drop(0, DropCategory::ExternalFile, DragPayload::Files(&paths)));
        assert!(!plain.drop_result().was_dropped);
    }

    #[test]
    fn refuses_out_of_range_rows() {
        let mut model = model(&["A"]);
        let drag = drag_rows(&model, &[0]);
        assert!(!model.can_accept_drop(2, DropCategory::IntraWidget, DragPayload::Rows(&drag)));
        assert!(!model.perform_drop(2, DropCategory::IntraWidget, DragPayload::Rows(&drag)));
        assert_eq!(model.drop_result(), DropResult::default());
    }

    #[test]
    fn clear_keeps_slot_but_drops_flag() {
        let mut model = model(&["A", "B"]);
        let drag = drag_rows(&model, &[0]);
        model.perform_drop(2, DropCategory::IntraWidget, DragPayload::Rows(&drag));
        model.clear_drop_result();
        assert!(!model.drop_result().was_dropped);
    }

    #[test]
    fn remove_and_rename() {
        let mut model = model(&["A", "B", "C", "D"]);
        model.remove_rows(&[0, 2]);
        assert_eq!(ids(&model), ["B", "D"]);

        assert!(model.rename(1, "Doom II".into()));
        assert_eq!(model.items()[1].label.as_ref(), "Doom II");
        assert!(!model.rename(5, "nope".into()));
    }
}
