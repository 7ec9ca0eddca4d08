use std::path::Path;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::list::ListItem;
use gpui_component::{Icon, IconName, Sizable as _, h_flex, v_flex};
use gpui_editable_list::{
    DndConfig, EditableDragListEvent, EditableDragListRowState, EditableDragListState,
    EditableListItem, editable_drag_list,
};

type ModList = Entity<EditableDragListState<ModKind>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModKind {
    Wad,
    Deh,
    Other,
}

impl ModKind {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("wad") => ModKind::Wad,
            Some("deh") | Some("bex") => ModKind::Deh,
            _ => ModKind::Other,
        }
    }
}

pub struct EditableListExample {
    mods: ModList,
    library: ModList,
    last_event: SharedString,
    _subscriptions: Vec<Subscription>,
}

impl EditableListExample {
    pub fn view(config: DndConfig, _window: &mut Window, cx: &mut App) -> Entity<Self> {
        let mods = cx.new(|cx| {
            EditableDragListState::new(cx)
                .items(demo_mods())
                .dnd_config(config)
                .name_editing(true)
                .path_items(item_from_path)
                .drag_on_row()
        });
        let library = cx.new(|cx| {
            EditableDragListState::new(cx)
                .items(demo_library())
                .inter_widget_transfer(true)
                .drag_on_row()
        });

        cx.new(|cx| {
            let _subscriptions = vec![
                cx.subscribe(&mods, |this: &mut Self, list, event: &EditableDragListEvent, cx| {
                    this.on_list_event("Mods", list, event, cx)
                }),
                cx.subscribe(&library, |this: &mut Self, list, event: &EditableDragListEvent, cx| {
                    this.on_list_event("Library", list, event, cx)
                }),
            ];
            Self {
                mods,
                library,
                last_event: "<none>".into(),
                _subscriptions,
            }
        })
    }

    fn on_list_event(
        &mut self,
        name: &str,
        list: ModList,
        event: &EditableDragListEvent,
        cx: &mut Context<Self>,
    ) {
        match *event {
            EditableDragListEvent::ItemsPlaced(placed) => {
                self.last_event = format!(
                    "{name}: {} item(s) placed at row {}",
                    placed.count, placed.row
                )
                .into();
            }
            EditableDragListEvent::EditRequested { row } => {
                list.update(cx, |state, cx| {
                    let Some(label) = state.items_ref().get(row).map(|item| item.label.clone())
                    else {
                        return;
                    };
                    let label = match label.strip_suffix(" *") {
                        Some(stripped) => stripped.to_string(),
                        None => format!("{label} *"),
                    };
                    state.rename_item(row, label, cx);
                });
                self.last_event = format!("{name}: renamed row {row}").into();
            }
        }
        tracing::info!("{}", self.last_event);
        cx.notify();
    }
}

impl Render for EditableListExample {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let mods = self.mods.read(cx);
        let dump = mods
            .items_ref()
            .iter()
            .enumerate()
            .map(|(ix, item)| {
                let marker = if mods.selection().contains(ix) { "*" } else { " " };
                format!("{marker} {ix:02}  {}", item.id)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let mode = format!("{:?}", mods.mode());

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_3()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Editable Drag List"),
                    )
                    .child(div().text_sm().text_color(theme.muted_foreground).child(
                        "Drag rows to reorder, drag rows from Library into Mods, or drop files from the desktop onto Mods. Double click or F2 renames a Mods row.",
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(format!(
                                "Mods mode: {mode}  |  last event: {}",
                                self.last_event
                            )),
                    ),
            )
            .child(
                h_flex()
                    .flex_1()
                    .min_h(px(0.))
                    .gap_x_3()
                    .child(render_panel("Mods", &self.mods, cx))
                    .child(render_panel("Library", &self.library, cx))
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w(px(0.))
                            .h_full()
                            .gap_y_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Debug (Mods order)"),
                            )
                            .child(
                                div()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .p(px(12.))
                                    .child(render_dump(dump)),
                            ),
                    ),
            )
    }
}

fn render_panel(title: &'static str, list: &ModList, cx: &App) -> impl IntoElement {
    let theme = cx.theme();
    v_flex()
        .w(px(320.))
        .min_w(px(0.))
        .h_full()
        .gap_y_2()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .child(title),
        )
        .child(
            div()
                .flex_1()
                .min_h(px(0.))
                .rounded(px(12.))
                .border_1()
                .border_color(theme.border)
                .bg(theme.background)
                .child(editable_drag_list(list, move |ix, item, row_state, _window, cx| {
                    render_list_row(ix, item, row_state, cx)
                })),
        )
}

fn render_list_row(
    ix: usize,
    item: &EditableListItem<ModKind>,
    row_state: EditableDragListRowState,
    cx: &mut App,
) -> ListItem {
    let theme = cx.theme();
    let meta_icon = match item.data {
        ModKind::Wad => IconName::Folder,
        ModKind::Deh | ModKind::Other => IconName::File,
    };

    ListItem::new(ix)
        .when(row_state.dragging, |this| this.opacity(0.4))
        .child(
            h_flex()
                .gap_x_2()
                .items_center()
                .child(
                    Icon::from(IconName::Menu)
                        .small()
                        .text_color(theme.muted_foreground),
                )
                .child(
                    Icon::from(meta_icon)
                        .small()
                        .text_color(theme.muted_foreground),
                )
                .child(item.label.clone()),
        )
}

fn render_dump(text: String) -> impl IntoElement {
    let lines = text
        .lines()
        .map(|line| div().text_sm().child(line.to_string()));
    v_flex().gap_y_0p5().children(lines)
}

fn item_from_path(path: &Path) -> Option<EditableListItem<ModKind>> {
    let label = path.file_name()?.to_string_lossy().to_string();
    Some(EditableListItem::new(
        path.display().to_string(),
        label,
        ModKind::from_path(path),
    ))
}

fn demo_mods() -> Vec<EditableListItem<ModKind>> {
    vec![
        EditableListItem::new("mods/brutal.pk3", "brutal.pk3", ModKind::Other),
        EditableListItem::new("mods/sunlust.wad", "sunlust.wad", ModKind::Wad),
        EditableListItem::new("mods/sunlust.deh", "sunlust.deh", ModKind::Deh),
        EditableListItem::new("mods/locked.wad", "locked.wad", ModKind::Wad).disabled(true),
        EditableListItem::new("mods/eviternity.wad", "eviternity.wad", ModKind::Wad),
    ]
}

fn demo_library() -> Vec<EditableListItem<ModKind>> {
    vec![
        EditableListItem::new("lib/scythe2.wad", "scythe2.wad", ModKind::Wad),
        EditableListItem::new("lib/av.wad", "av.wad", ModKind::Wad),
        EditableListItem::new("lib/dehacked.deh", "dehacked.deh", ModKind::Deh),
        EditableListItem::new("lib/hr.wad", "hr.wad", ModKind::Wad),
    ]
}
