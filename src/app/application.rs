//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme};

use crate::app::actions::{MenuAction, new_key_bindings};
use crate::app::config::FolioConfig;
use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::{Error, Result};
use crate::services::ReqwestHttpClient;

/// Run the Folio GUI application
pub fn run_app(config: FolioConfig) {
    let app = match ReqwestHttpClient::new() {
        Ok(client) => Application::new().with_http_client(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "Remote images disabled");
            Application::new()
        }
    };

    app.with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Application-level actions
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });
        cx.bind_keys(new_key_bindings());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        let mode = entities.theme.read(cx).mode();
        Theme::change(mode, None, cx);
        cx.set_global(entities.clone());

        if let Err(e) = open_main_window(&config, entities, cx) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn open_main_window(config: &FolioConfig, entities: AppEntities, cx: &mut App) -> Result<()> {
    let bounds = Bounds::centered(
        None,
        size(px(config.window_width), px(config.window_height)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Ahmad Faizal | Creative Director")),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |window, cx| {
        let workspace = cx.new(|cx| Workspace::new(entities, window, cx));
        cx.new(|cx| Root::new(workspace, window, cx))
    })
    .map_err(|e| Error::Window {
        message: e.to_string(),
    })?;

    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "Main window opened"
    );
    Ok(())
}
