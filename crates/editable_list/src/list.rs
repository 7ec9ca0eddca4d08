use std::{ops::Range, path::Path, rc::Rc};

use gpui::{
    App, AppContext as _, Bounds, ClickEvent, Context, CursorStyle, DragMoveEvent, ElementId,
    Entity, EventEmitter, ExternalPaths, FocusHandle, InteractiveElement as _, IntoElement,
    KeyBinding, ListSizingBehavior, ParentElement as _, Pixels, Point, Render, RenderOnce,
    SharedString, StatefulInteractiveElement as _, StyleRefinement, Styled, UniformListScrollHandle,
    Window, actions, div, prelude::FluentBuilder as _, px, uniform_list,
};
use gpui_component::list::ListItem;
use gpui_component::scroll::{Scrollbar, ScrollbarState};
use gpui_component::{ActiveTheme as _, StyledExt as _};

use crate::config::{DndConfig, DragDropMode, EditTriggers};
use crate::controller::{DragListController, DropOutcome, ItemsPlaced};
use crate::dnd::{DragEvent, DropPlace, DropPosition, ListDrag, ListId};
use crate::model::{DropTargetModel as _, EditableListItem, ListModel};
use crate::selection::Selection;

const CONTEXT: &str = "EditableDragList";

actions!(editable_drag_list, [RenameSelected]);

pub fn init(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("f2", RenameSelected, Some(CONTEXT))]);
}

/// Create an [`EditableDragList`].
pub fn editable_drag_list<T, R>(
    state: &Entity<EditableDragListState<T>>,
    render_item: R,
) -> EditableDragList<T>
where
    T: Clone + 'static,
    R: Fn(usize, &EditableListItem<T>, EditableDragListRowState, &mut Window, &mut App) -> ListItem
        + 'static,
{
    EditableDragList::new(state, render_item)
}

#[derive(Clone)]
struct RowDrag<T> {
    drag: ListDrag<EditableListItem<T>>,
    ix: usize,
    label: SharedString,
}

impl<T> RowDrag<T> {
    fn ghost_label(&self) -> SharedString {
        match self.drag.len() {
            0 | 1 => self.label.clone(),
            n => format!("{} +{}", self.label, n - 1).into(),
        }
    }
}

struct DragGhost {
    label: SharedString,
}

impl DragGhost {
    fn new(label: SharedString) -> Self {
        Self { label }
    }
}

impl Render for DragGhost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .px(px(10.))
            .py(px(6.))
            .rounded(px(8.))
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .shadow_md()
            .text_color(theme.popover_foreground)
            .text_sm()
            .child(self.label.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EditableDragListRowState {
    pub selected: bool,
    pub dragging: bool,
    pub drop_target: Option<DropPlace>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditableDragListEvent {
    /// Rows landed and are now the selection.
    ItemsPlaced(ItemsPlaced),
    /// The user asked to rename `row` in place.
    EditRequested { row: usize },
}

type ItemsPlacedCallback<T> = Rc<dyn Fn(ItemsPlaced, &[EditableListItem<T>])>;

struct EditableDragListCallbacks<T> {
    on_items_placed: Option<ItemsPlacedCallback<T>>,
}

impl<T> Default for EditableDragListCallbacks<T> {
    fn default() -> Self {
        Self {
            on_items_placed: None,
        }
    }
}

/// State for a selectable list that reorders by drag and drop and accepts rows from other
/// lists and files from the desktop.
pub struct EditableDragListState<T: Clone + 'static> {
    focus_handle: FocusHandle,
    controller: DragListController<ListModel<T>>,
    scrollbar_state: ScrollbarState,
    scroll_handle: UniformListScrollHandle,
    drag_handle_width: Option<Pixels>,
    finish_scheduled: bool,
    callbacks: EditableDragListCallbacks<T>,
    render_item: Rc<
        dyn Fn(usize, &EditableListItem<T>, EditableDragListRowState, &mut Window, &mut App)
            -> ListItem,
    >,
}

impl<T: Clone + 'static> EventEmitter<EditableDragListEvent> for EditableDragListState<T> {}

impl<T: Clone + 'static> EditableDragListState<T> {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let id = ListId::from(cx.entity_id().as_u64());
        Self {
            focus_handle: cx.focus_handle(),
            controller: DragListController::new(id, ListModel::default()),
            scrollbar_state: ScrollbarState::default(),
            scroll_handle: UniformListScrollHandle::default(),
            drag_handle_width: Some(px(32.)),
            finish_scheduled: false,
            callbacks: EditableDragListCallbacks::default(),
            render_item: Rc::new(|_, _, _, _, _| ListItem::new("editable-drag-list-empty")),
        }
    }

    pub fn items(mut self, items: impl Into<Vec<EditableListItem<T>>>) -> Self {
        self.controller.model_mut().set_items(items);
        self
    }

    /// Accept dropped files, turning each path into an item. Paths mapped to `None` are
    /// skipped.
    pub fn path_items(
        mut self,
        from_path: impl Fn(&Path) -> Option<EditableListItem<T>> + 'static,
    ) -> Self {
        self.controller.model_mut().set_path_items(from_path);
        self
    }

    /// Restrict drag start to a left-side handle area with the given width.
    pub fn drag_handle_width(mut self, width: Pixels) -> Self {
        self.drag_handle_width = Some(width);
        self
    }

    /// Allow dragging from anywhere on the row.
    pub fn drag_on_row(mut self) -> Self {
        self.drag_handle_width = None;
        self
    }

    pub fn dnd_config(mut self, config: DndConfig) -> Self {
        self.controller.set_config(config);
        self
    }

    pub fn reorder(mut self, enabled: bool) -> Self {
        self.controller.set_reorder_enabled(enabled);
        self
    }

    pub fn inter_widget_transfer(mut self, enabled: bool) -> Self {
        self.controller.set_inter_widget_transfer_enabled(enabled);
        self
    }

    pub fn external_file_drop(mut self, enabled: bool) -> Self {
        self.controller.set_external_file_drop_enabled(enabled);
        self
    }

    pub fn name_editing(mut self, enabled: bool) -> Self {
        self.controller.set_name_editing(enabled);
        self
    }

    pub fn edit_triggers(mut self, triggers: EditTriggers) -> Self {
        self.controller.set_edit_triggers(triggers);
        self
    }

    /// Provide a callback invoked after dropped rows were selected.
    pub fn on_items_placed(
        mut self,
        on_items_placed: impl Fn(ItemsPlaced, &[EditableListItem<T>]) + 'static,
    ) -> Self {
        self.callbacks.on_items_placed = Some(Rc::new(on_items_placed));
        self
    }

    pub fn set_items(
        &mut self,
        items: impl Into<Vec<EditableListItem<T>>>,
        cx: &mut Context<Self>,
    ) {
        self.controller.reset(|model| model.set_items(items));
        cx.notify();
    }

    pub fn items_ref(&self) -> &[EditableListItem<T>] {
        self.controller.model().items()
    }

    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        self.controller.selection().to_vec()
    }

    pub fn set_selected_rows(
        &mut self,
        rows: impl IntoIterator<Item = usize>,
        cx: &mut Context<Self>,
    ) {
        let rows: Vec<usize> = rows
            .into_iter()
            .filter(|&row| self.controller.model().is_row_enabled(row))
            .collect();
        let selection = self.controller.selection_mut();
        selection.clear();
        for row in rows {
            selection.insert(row);
        }
        cx.notify();
    }

    pub fn mode(&self) -> DragDropMode {
        self.controller.mode()
    }

    pub fn dnd(&self) -> DndConfig {
        self.controller.config()
    }

    pub fn set_reorder_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.controller.set_reorder_enabled(enabled);
        cx.notify();
    }

    pub fn set_inter_widget_transfer_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.controller.set_inter_widget_transfer_enabled(enabled);
        cx.notify();
    }

    pub fn set_external_file_drop_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.controller.set_external_file_drop_enabled(enabled);
        cx.notify();
    }

    pub fn set_name_editing(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.controller.set_name_editing(enabled);
        cx.notify();
    }

    /// Commit an in-place rename. Does nothing unless name editing is enabled.
    pub fn rename_item(
        &mut self,
        row: usize,
        label: impl Into<SharedString>,
        cx: &mut Context<Self>,
    ) -> bool {
        let renamed = self.controller.rename(row, label);
        if renamed {
            cx.notify();
        }
        renamed
    }

    fn on_row_click(
        &mut self,
        ix: usize,
        event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.focus_handle.focus(window);
        self.controller.click(ix, event.modifiers());
        if event.click_count() >= 2
            && let Some(row) = self.controller.double_click_edit(ix)
        {
            cx.emit(EditableDragListEvent::EditRequested { row });
        }
        cx.notify();
    }

    fn on_rename_selected(
        &mut self,
        _: &RenameSelected,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(row) = self.controller.edit_key_edit() {
            cx.emit(EditableDragListEvent::EditRequested { row });
        }
    }

    fn on_drag_start(&mut self, drag: &RowDrag<T>, _window: &mut Window, cx: &mut Context<Self>) {
        if self.controller.begin_drag(drag.ix, &drag.drag) {
            cx.notify();
        }
    }

    fn hover(
        &mut self,
        event: DragEvent<'_, EditableListItem<T>>,
        position: DropPosition,
        cx: &mut Context<Self>,
    ) {
        let before = self.controller.indicator();
        self.controller.drag_move(&event, position);
        if self.controller.indicator() != before {
            cx.notify();
        }
    }

    fn on_row_drag_move(
        &mut self,
        ix: usize,
        event: &DragMoveEvent<RowDrag<T>>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(position) = row_position(ix, event.bounds, event.event.position) else {
            return;
        };
        let drag = event.drag(cx).drag.clone();
        self.hover(DragEvent::from_list(&drag), position, cx);
    }

    fn on_files_drag_move(
        &mut self,
        ix: usize,
        event: &DragMoveEvent<ExternalPaths>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(position) = row_position(ix, event.bounds, event.event.position) else {
            return;
        };
        let paths = event.drag(cx).paths().to_vec();
        self.hover(DragEvent::external_files(&paths), position, cx);
    }

    fn on_leave<D: 'static>(
        &mut self,
        event: &DragMoveEvent<D>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !event.bounds.contains(&event.event.position) && self.controller.indicator().is_some() {
            self.controller.drag_leave();
            cx.notify();
        }
    }

    /// Position of a drop on row `ix`, keeping the side the last move pointed at.
    fn drop_position(&self, ix: Option<usize>) -> DropPosition {
        let Some(ix) = ix else {
            return DropPosition::End;
        };
        match self.controller.indicator().map(|indicator| indicator.position) {
            Some(position @ DropPosition::Row { row, .. }) if row == ix => position,
            _ => DropPosition::Row {
                row: ix,
                place: DropPlace::After,
            },
        }
    }

    fn on_rows_dropped(
        &mut self,
        drag: &RowDrag<T>,
        ix: Option<usize>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.stop_propagation();
        let position = self.drop_position(ix);
        let outcome = self
            .controller
            .drop(&DragEvent::from_list(&drag.drag), position);
        self.after_drop(outcome, window, cx);
    }

    fn on_files_dropped(
        &mut self,
        paths: &ExternalPaths,
        ix: Option<usize>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.stop_propagation();
        let position = self.drop_position(ix);
        let outcome = self
            .controller
            .drop(&DragEvent::external_files(paths.paths()), position);
        self.after_drop(outcome, window, cx);
    }

    fn after_drop(&mut self, outcome: DropOutcome, window: &mut Window, cx: &mut Context<Self>) {
        match outcome {
            DropOutcome::Completed(Some(placed)) => self.items_placed(placed, cx),
            DropOutcome::Deferred => self.schedule_finish(window, cx),
            DropOutcome::Completed(None) | DropOutcome::Ignored => {}
        }
        cx.notify();
    }

    fn schedule_finish(&mut self, window: &Window, cx: &mut Context<Self>) {
        if self.finish_scheduled {
            return;
        }
        self.finish_scheduled = true;
        cx.defer_in(window, |this, _window, cx| {
            this.finish_scheduled = false;
            this.complete_gesture(cx);
        });
    }

    /// Ends the current gesture unless a drag is still in flight.
    fn complete_gesture(&mut self, cx: &mut Context<Self>) {
        if cx.has_active_drag() {
            return;
        }
        if let Some(placed) = self.controller.finish_gesture() {
            self.items_placed(placed, cx);
        }
        cx.notify();
    }

    fn items_placed(&mut self, placed: ItemsPlaced, cx: &mut Context<Self>) {
        tracing::debug!(row = placed.row, count = placed.count, "items placed");
        if let Some(on_items_placed) = self.callbacks.on_items_placed.as_ref() {
            on_items_placed(placed, self.controller.model().items());
        }
        cx.emit(EditableDragListEvent::ItemsPlaced(placed));
    }
}

fn row_position(
    ix: usize,
    bounds: Bounds<Pixels>,
    position: Point<Pixels>,
) -> Option<DropPosition> {
    if !bounds.contains(&position) {
        return None;
    }
    let place = if position.y < bounds.center().y {
        DropPlace::Before
    } else {
        DropPlace::After
    };
    Some(DropPosition::Row { row: ix, place })
}

impl<T: Clone + 'static> Render for EditableDragListState<T> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // The gesture is over once no drag is active anymore, dropped or not.
        if !cx.has_active_drag() && self.controller.gesture_pending() {
            self.schedule_finish(window, cx);
        }

        let render_item = Rc::clone(&self.render_item);
        let state_entity = cx.entity();
        let drag_handle_width = self.drag_handle_width;
        let mode = self.controller.mode();
        let item_count = self.controller.model().len();

        div()
            .id("editable-drag-list-state")
            .key_context(CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_rename_selected))
            .size_full()
            .relative()
            .on_drag_move::<RowDrag<T>>(cx.listener(Self::on_leave::<RowDrag<T>>))
            .on_drag_move::<ExternalPaths>(cx.listener(Self::on_leave::<ExternalPaths>))
            .child(
                uniform_list("items", item_count, {
                    cx.processor(move |state, visible_range: Range<usize>, window, cx| {
                        let drop_target_bg = cx.theme().drop_target;
                        let drag_border = cx.theme().drag_border;
                        let active_drag = cx.has_active_drag();
                        let indicator = state.controller.indicator();
                        let mut rows = Vec::with_capacity(visible_range.len());
                        for ix in visible_range {
                            let item = &state.controller.model().items()[ix];

                            let selected = state.controller.selection().contains(ix);
                            let dragging =
                                active_drag && state.controller.outgoing_rows().contains(&ix);
                            let drop_target = indicator.and_then(|indicator| {
                                match indicator.position {
                                    DropPosition::Row { row, place } if row == ix => Some(place),
                                    _ => None,
                                }
                            });

                            let row_state = EditableDragListRowState {
                                selected,
                                dragging,
                                drop_target,
                            };

                            let list_item = (render_item)(ix, item, row_state, window, cx);
                            let drag_value = RowDrag {
                                drag: state.controller.new_drag(),
                                ix,
                                label: item.label.clone(),
                            };

                            let is_disabled = item.is_disabled();
                            let can_drag = !is_disabled && mode.can_start_drag();
                            let row = div()
                                .id(ix)
                                .relative()
                                .child(list_item.disabled(is_disabled).selected(selected))
                                .when_some(drop_target, |this, place| {
                                    let this = this
                                        .bg(drop_target_bg.alpha(drop_target_bg.a.max(0.2)))
                                        .border_color(drag_border);
                                    match place {
                                        DropPlace::Before => this.border_t_2(),
                                        DropPlace::After => this.border_b_2(),
                                    }
                                })
                                .on_drag_move::<RowDrag<T>>(cx.listener(
                                    move |this, event: &DragMoveEvent<RowDrag<T>>, window, cx| {
                                        this.on_row_drag_move(ix, event, window, cx);
                                    },
                                ))
                                .on_drag_move::<ExternalPaths>(cx.listener(
                                    move |this, event: &DragMoveEvent<ExternalPaths>, window, cx| {
                                        this.on_files_drag_move(ix, event, window, cx);
                                    },
                                ))
                                .on_drop::<RowDrag<T>>(cx.listener(
                                    move |this, drag: &RowDrag<T>, window, cx| {
                                        this.on_rows_dropped(drag, Some(ix), window, cx);
                                    },
                                ))
                                .on_drop::<ExternalPaths>(cx.listener(
                                    move |this, paths: &ExternalPaths, window, cx| {
                                        this.on_files_dropped(paths, Some(ix), window, cx);
                                    },
                                ))
                                .when(!is_disabled, |this| {
                                    this.on_click(cx.listener(
                                        move |this, click_event, window, cx| {
                                            this.on_row_click(ix, click_event, window, cx);
                                        },
                                    ))
                                })
                                .when(can_drag, |this| {
                                    let state_entity = state_entity.clone();
                                    let start_drag = move |drag: &RowDrag<T>,
                                                           _offset: Point<Pixels>,
                                                           window: &mut Window,
                                                           cx: &mut App| {
                                        state_entity.update(cx, |state, cx| {
                                            state.on_drag_start(drag, window, cx);
                                        });
                                        let label = drag.ghost_label();
                                        cx.new(|_| DragGhost::new(label))
                                    };
                                    match drag_handle_width {
                                        Some(handle_width) => this.child(
                                            div()
                                                .id(("editable-drag-list-handle", ix))
                                                .absolute()
                                                .top_0()
                                                .left_0()
                                                .bottom_0()
                                                .w(handle_width)
                                                .cursor(CursorStyle::OpenHand)
                                                .on_drag(drag_value, start_drag),
                                        ),
                                        None => this.on_drag(drag_value, start_drag),
                                    }
                                });

                            rows.push(row);
                        }
                        rows
                    })
                })
                .on_drop::<RowDrag<T>>(cx.listener(|this, drag: &RowDrag<T>, window, cx| {
                    this.on_rows_dropped(drag, None, window, cx);
                }))
                .on_drop::<ExternalPaths>(cx.listener(
                    |this, paths: &ExternalPaths, window, cx| {
                        this.on_files_dropped(paths, None, window, cx);
                    },
                ))
                .flex_grow()
                .size_full()
                .track_scroll(self.scroll_handle.clone())
                .with_sizing_behavior(ListSizingBehavior::Auto)
                .into_any_element(),
            )
            .child(
                div()
                    .absolute()
                    .top_0()
                    .right_0()
                    .bottom_0()
                    .w(px(12.))
                    .child(Scrollbar::uniform_scroll(
                        &self.scrollbar_state,
                        &self.scroll_handle,
                    )),
            )
    }
}

/// A list element with drag-and-drop reordering, transfer between lists and file drops.
#[derive(IntoElement)]
pub struct EditableDragList<T: Clone + 'static> {
    id: ElementId,
    state: Entity<EditableDragListState<T>>,
    style: StyleRefinement,
    render_item: Rc<
        dyn Fn(usize, &EditableListItem<T>, EditableDragListRowState, &mut Window, &mut App)
            -> ListItem,
    >,
}

impl<T: Clone + 'static> EditableDragList<T> {
    pub fn new<R>(state: &Entity<EditableDragListState<T>>, render_item: R) -> Self
    where
        R: Fn(usize, &EditableListItem<T>, EditableDragListRowState, &mut Window, &mut App)
                -> ListItem
            + 'static,
    {
        Self {
            id: ElementId::Name(format!("editable-drag-list-{}", state.entity_id()).into()),
            state: state.clone(),
            style: StyleRefinement::default(),
            render_item: Rc::new(render_item),
        }
    }
}

impl<T: Clone + 'static> Styled for EditableDragList<T> {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl<T: Clone + 'static> RenderOnce for EditableDragList<T> {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        self.state
            .update(cx, |state, _| state.render_item = self.render_item);

        div()
            .id(self.id)
            .size_full()
            .child(self.state)
            .refine_style(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use gpui::{Bounds, TestAppContext, point, px, size};

    use super::*;

    fn bounds() -> Bounds<Pixels> {
        Bounds::new(point(px(0.), px(100.)), size(px(200.), px(20.)))
    }

    #[test]
    fn upper_half_drops_before() {
        assert_eq!(
            row_position(4, bounds(), point(px(10.), px(104.))),
            Some(DropPosition::Row {
                row: 4,
                place: DropPlace::Before
            })
        );
    }

    #[test]
    fn lower_half_drops_after() {
        assert_eq!(
            row_position(4, bounds(), point(px(10.), px(115.))),
            Some(DropPosition::Row {
                row: 4,
                place: DropPlace::After
            })
        );
    }

    #[test]
    fn outside_the_row_is_ignored() {
        assert_eq!(row_position(4, bounds(), point(px(10.), px(130.))), None);
    }

    #[test]
    fn ghost_counts_extra_rows() {
        let drag = ListDrag::new(ListId::from(1), crate::dnd::DropActions::MOVE);
        let row_drag = RowDrag {
            drag: drag.clone(),
            ix: 0,
            label: "e1m1.wad".into(),
        };
        assert_eq!(row_drag.ghost_label().as_ref(), "e1m1.wad");

        drag.fill(
            vec![0, 1, 2],
            vec![
                EditableListItem::new("a", "a", ()),
                EditableListItem::new("b", "b", ()),
                EditableListItem::new("c", "c", ()),
            ],
        );
        assert_eq!(row_drag.ghost_label().as_ref(), "e1m1.wad +2");
    }

    #[gpui::test]
    fn deferred_drop_is_announced_once_at_gesture_end(cx: &mut TestAppContext) {
        let state = cx.new(|cx| {
            EditableDragListState::new(cx).items(vec![
                EditableListItem::new("a", "a", ()),
                EditableListItem::new("b", "b", ()),
                EditableListItem::new("c", "c", ()),
            ])
        });
        let events = Rc::new(RefCell::new(Vec::new()));
        let _subscription = cx.update(|cx| {
            let events = events.clone();
            cx.subscribe(&state, move |_, event: &EditableDragListEvent, _| {
                events.borrow_mut().push(*event);
            })
        });

        state.update(cx, |state, cx| {
            let drag = state.controller.new_drag();
            assert!(state.controller.begin_drag(0, &drag));
            assert_eq!(
                state
                    .controller
                    .drop(&DragEvent::from_list(&drag), DropPosition::End),
                DropOutcome::Deferred
            );
            assert!(state.controller.gesture_pending());

            state.complete_gesture(cx);
            state.complete_gesture(cx);
        });

        assert_eq!(
            *events.borrow(),
            vec![EditableDragListEvent::ItemsPlaced(ItemsPlaced {
                row: 2,
                count: 1
            })]
        );
        state.read_with(cx, |state, _| {
            assert_eq!(state.selected_rows(), vec![2]);
            assert!(!state.controller.gesture_pending());
            let ids: Vec<_> = state.items_ref().iter().map(|i| i.id.to_string()).collect();
            assert_eq!(ids, ["b", "c", "a"]);
        });
    }

    #[gpui::test]
    fn duplicate_rows_stay_selected(cx: &mut TestAppContext) {
        let state = cx.new(|cx| {
            EditableDragListState::new(cx).items(vec![
                EditableListItem::new("a", "a", ()),
                EditableListItem::new("b", "b", ()),
                EditableListItem::new("c", "c", ()).disabled(true),
            ])
        });
        state.update(cx, |state, cx| state.set_selected_rows([1, 1, 2, 7], cx));
        state.read_with(cx, |state, _| assert_eq!(state.selected_rows(), vec![1]));
    }
}
