use gpui::{Modifiers, SharedString};

use crate::config::{DndConfig, DragDropMode, EditTriggers};
use crate::dnd::{
    DragEvent, DragPayload, DropActions, DropCategory, DropPosition, ListDrag, ListId, classify,
    is_acceptable,
};
use crate::model::DropTargetModel;
use crate::selection::Selection;

/// Rows that ended up selected after a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemsPlaced {
    pub row: usize,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropIndicator {
    pub position: DropPosition,
    /// Insertion gap the drop would land in.
    pub row: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragResponse {
    Accepted(DropIndicator),
    Ignored,
}

impl DragResponse {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DragResponse::Accepted(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop was rejected by the policy or by the model.
    Ignored,
    /// The model took the drop; the selection is rebuilt when the gesture ends.
    Deferred,
    /// File drop, reconciled right away.
    Completed(Option<ItemsPlaced>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// The model does not record drop results.
    Unsupported,
    /// Nothing was dropped since the last reconciliation.
    Idle,
    Placed(ItemsPlaced),
}

impl Reconciliation {
    pub fn placed(self) -> Option<ItemsPlaced> {
        match self {
            Reconciliation::Placed(placed) => Some(placed),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Accepted(DropCategory),
    Rejected,
}

/// Drag-and-drop state machine of one list, independent of any window.
///
/// A gesture goes through `drag_enter`/`drag_move`, at most one `drop`, and always ends with
/// [`DragListController::finish_gesture`]. Selection reconciliation for row drops happens
/// there, once the model move and any source-side row removal are both done.
pub struct DragListController<M: DropTargetModel> {
    id: ListId,
    model: M,
    selection: Selection,
    config: DndConfig,
    edit_triggers: EditTriggers,
    verdict: Option<Verdict>,
    indicator: Option<DropIndicator>,
    outgoing: Option<ListDrag<M::Item>>,
    awaiting_gesture_end: bool,
}

impl<M: DropTargetModel> DragListController<M> {
    pub fn new(id: ListId, model: M) -> Self {
        Self {
            id,
            model,
            selection: Selection::new(),
            config: DndConfig::default(),
            edit_triggers: EditTriggers::none(),
            verdict: None,
            indicator: None,
            outgoing: None,
            awaiting_gesture_end: false,
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn config(&self) -> DndConfig {
        self.config
    }

    pub fn set_config(&mut self, config: DndConfig) {
        self.config = config;
    }

    pub fn set_reorder_enabled(&mut self, enabled: bool) {
        self.config.set_reorder_enabled(enabled);
    }

    pub fn set_inter_widget_transfer_enabled(&mut self, enabled: bool) {
        self.config.set_inter_widget_transfer_enabled(enabled);
    }

    pub fn set_external_file_drop_enabled(&mut self, enabled: bool) {
        self.config.set_external_file_drop_enabled(enabled);
    }

    pub fn mode(&self) -> DragDropMode {
        self.config.mode()
    }

    pub fn edit_triggers(&self) -> EditTriggers {
        self.edit_triggers
    }

    pub fn set_edit_triggers(&mut self, triggers: EditTriggers) {
        self.edit_triggers = triggers;
    }

    pub fn set_name_editing(&mut self, enabled: bool) {
        self.edit_triggers.set_name_editing(enabled);
    }

    pub fn indicator(&self) -> Option<DropIndicator> {
        self.indicator
    }

    /// Rows this list is currently dragging out, if it started the gesture.
    pub fn outgoing_rows(&self) -> &[usize] {
        self.outgoing.as_ref().map(|drag| drag.rows()).unwrap_or(&[])
    }

    /// Whether anything has to be done when the current gesture ends.
    pub fn gesture_pending(&self) -> bool {
        self.outgoing.is_some() || self.verdict.is_some() || self.awaiting_gesture_end
    }

    pub fn classify(&self, event: &DragEvent<'_, M::Item>) -> DropCategory {
        classify(event, self.id)
    }

    pub fn is_acceptable(&self, event: &DragEvent<'_, M::Item>) -> bool {
        is_acceptable(&self.config, event, self.id)
    }

    fn evaluate(&self, event: &DragEvent<'_, M::Item>) -> Verdict {
        let category = self.classify(event);
        let mode = self.config.mode();
        let passes_mode = match category {
            DropCategory::IntraWidget => mode.can_start_drag(),
            _ => mode.accepts_foreign_drops(),
        };

        if passes_mode && self.is_acceptable(event) {
            Verdict::Accepted(category)
        } else {
            tracing::debug!(list = ?self.id, ?category, ?mode, "drag rejected");
            Verdict::Rejected
        }
    }

    pub fn drag_enter(
        &mut self,
        event: &DragEvent<'_, M::Item>,
        position: DropPosition,
    ) -> DragResponse {
        let verdict = self.evaluate(event);
        self.verdict = Some(verdict);
        self.respond(verdict, event, position)
    }

    /// Reuses the verdict of the enter event; a move without a preceding enter acts as one.
    pub fn drag_move(
        &mut self,
        event: &DragEvent<'_, M::Item>,
        position: DropPosition,
    ) -> DragResponse {
        match self.verdict {
            Some(verdict) => self.respond(verdict, event, position),
            None => self.drag_enter(event, position),
        }
    }

    pub fn drag_leave(&mut self) {
        self.indicator = None;
    }

    fn respond(
        &mut self,
        verdict: Verdict,
        event: &DragEvent<'_, M::Item>,
        position: DropPosition,
    ) -> DragResponse {
        let Verdict::Accepted(category) = verdict else {
            self.indicator = None;
            return DragResponse::Ignored;
        };

        let row = position.insertion_row(self.model.len());
        if !self.model.can_accept_drop(row, category, event.payload()) {
            self.indicator = None;
            return DragResponse::Ignored;
        }

        let indicator = DropIndicator { position, row };
        self.indicator = Some(indicator);
        DragResponse::Accepted(indicator)
    }

    pub fn drop(&mut self, event: &DragEvent<'_, M::Item>, position: DropPosition) -> DropOutcome {
        self.indicator = None;
        let verdict = match self.verdict {
            Some(verdict) => verdict,
            None => self.evaluate(event),
        };
        // One drop per gesture.
        self.verdict = Some(Verdict::Rejected);
        let Verdict::Accepted(category) = verdict else {
            return DropOutcome::Ignored;
        };

        let len_before = self.model.len();
        let row = position.insertion_row(len_before);
        let payload = event.payload();
        if !self.model.can_accept_drop(row, category, payload)
            || !self.model.perform_drop(row, category, payload)
        {
            tracing::debug!(list = ?self.id, ?category, row, "model refused drop");
            return DropOutcome::Ignored;
        }
        tracing::debug!(list = ?self.id, ?category, row, "drop performed");

        match category {
            DropCategory::ExternalFile => {
                let inserted = self.model.len().saturating_sub(len_before);
                self.selection.rows_inserted(row, inserted);
                DropOutcome::Completed(self.reconcile_selection().placed())
            }
            DropCategory::IntraWidget | DropCategory::InterWidget => {
                if category == DropCategory::InterWidget
                    && event.possible_actions().contains(DropActions::MOVE)
                    && let DragPayload::Rows(drag) = payload
                {
                    drag.mark_taken();
                }
                self.awaiting_gesture_end = true;
                DropOutcome::Deferred
            }
        }
    }

    /// A fresh, unfilled drag for this list.
    pub fn new_drag(&self) -> ListDrag<M::Item> {
        ListDrag::new(self.id, DropActions::MOVE)
    }

    /// Starts a gesture from `row`, dragging the whole selection if `row` is part of it.
    pub fn begin_drag(&mut self, row: usize, drag: &ListDrag<M::Item>) -> bool {
        if !self.config.mode().can_start_drag()
            || drag.source() != self.id
            || row >= self.model.len()
            || !self.model.is_row_enabled(row)
        {
            return false;
        }

        if !self.selection.contains(row) {
            self.selection.select_only(row);
        }
        let rows: Vec<usize> = self
            .selection
            .rows()
            .filter(|&r| r < self.model.len() && self.model.is_row_enabled(r))
            .collect();
        let items = rows.iter().map(|&r| self.model.items()[r].clone()).collect();
        if !drag.fill(rows, items) {
            return false;
        }

        self.outgoing = Some(drag.clone());
        true
    }

    /// Completion hook of a drag gesture, called once whatever drives the gesture is done
    /// with it, whether it was dropped or cancelled.
    pub fn finish_gesture(&mut self) -> Option<ItemsPlaced> {
        self.verdict = None;
        self.indicator = None;
        let dropped_here = std::mem::take(&mut self.awaiting_gesture_end);

        if let Some(drag) = self.outgoing.take()
            && drag.was_taken()
        {
            tracing::debug!(list = ?self.id, rows = ?drag.rows(), "removing rows moved out");
            self.model.remove_rows(drag.rows());
            self.selection.rows_removed(drag.rows());
        }

        // File drops were reconciled in `drop`; cancelled gestures have nothing to reconcile.
        if !dropped_here {
            return None;
        }
        self.reconcile_selection().placed()
    }

    /// Rebuilds the selection from the model's drop result and clears it.
    pub fn reconcile_selection(&mut self) -> Reconciliation {
        let Some(provider) = self.model.drop_result_provider() else {
            tracing::warn!(
                list = ?self.id,
                "list model does not record drop results; selection is not updated after drag and drop"
            );
            return Reconciliation::Unsupported;
        };

        let result = provider.drop_result();
        if !result.was_dropped {
            return Reconciliation::Idle;
        }
        provider.clear_drop_result();

        let placed = ItemsPlaced {
            row: result.destination_row,
            count: result.item_count,
        };
        self.selection.clear();
        self.selection
            .select_range(placed.row..placed.row + placed.count);
        Reconciliation::Placed(placed)
    }

    pub fn click(&mut self, row: usize, modifiers: Modifiers) {
        if row >= self.model.len() || !self.model.is_row_enabled(row) {
            return;
        }
        if modifiers.shift {
            self.selection.extend_to(row);
            let model = &self.model;
            self.selection.retain(|r| model.is_row_enabled(r));
        } else if modifiers.secondary() {
            self.selection.toggle(row);
        } else {
            self.selection.select_only(row);
        }
    }

    /// The row to rename after a double click, if double click editing is on.
    pub fn double_click_edit(&self, row: usize) -> Option<usize> {
        (self.edit_triggers.double_click && row < self.model.len()).then_some(row)
    }

    /// The row to rename after the edit key, if key editing is on.
    pub fn edit_key_edit(&self) -> Option<usize> {
        if !self.edit_triggers.edit_key {
            return None;
        }
        self.selection
            .anchor()
            .filter(|&row| self.selection.contains(row))
            .or_else(|| self.selection.first())
            .filter(|&row| row < self.model.len())
    }

    pub fn rename(&mut self, row: usize, label: impl Into<SharedString>) -> bool {
        self.edit_triggers.any() && self.model.rename(row, label.into())
    }

    /// Replaces all items through `f`, dropping any selection and gesture state.
    pub fn reset(&mut self, f: impl FnOnce(&mut M)) {
        f(&mut self.model);
        self.selection.clear();
        self.verdict = None;
        self.indicator = None;
        self.outgoing = None;
        self.awaiting_gesture_end = false;
    }
}
