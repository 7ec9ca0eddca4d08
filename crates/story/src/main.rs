mod editable_list;

use anyhow::Context as _;
use gpui::*;
use gpui_component::Root;
use gpui_editable_list::DndConfig;
use tracing_subscriber::EnvFilter;

use editable_list::EditableListExample;

const CONFIG_ENV: &str = "EDITABLE_LIST_CONFIG";

/// Drag-and-drop policy for the Mods list, from a JSON file named by `EDITABLE_LIST_CONFIG`.
fn load_config() -> anyhow::Result<DndConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(demo_config());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

/// Everything on, so the demo shows all three kinds of drops.
fn demo_config() -> DndConfig {
    let mut config = DndConfig::default();
    config.set_inter_widget_transfer_enabled(true);
    config.set_external_file_drop_enabled(true);
    config
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config().unwrap_or_else(|err| {
        tracing::warn!("{err:#}; using demo list config");
        demo_config()
    });
    tracing::info!(?config, mode = ?config.mode(), "starting editable list story");

    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        gpui_editable_list::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("Editable Drag List".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                move |window, cx| {
                    let view = EditableListExample::view(config, window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
