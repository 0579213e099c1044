use anyhow::Result;
use billing_core::BillDraft;
use gpui::{
    AnyElement, App, AppContext, Bounds, Context, Entity, IntoElement, KeyBinding, Menu, MenuItem,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit, ToggleVerboseLogging,
    components::{AppWindow, BillPanel, WindowPreferences},
    config::AppConfig,
    quit, toggle_verbose_logging,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate shortcuts
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("cmd-shift-l", ToggleVerboseLogging, None),
    ]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
        KeyBinding::new("ctrl-shift-l", ToggleVerboseLogging, None),
    ]);

    app_cx.on_action(quit);
    app_cx.on_action(toggle_verbose_logging);

    app_cx.set_menus(vec![Menu {
        name: "Billing".into(),
        items: vec![
            MenuItem::action("Verbose Logging", ToggleVerboseLogging),
            MenuItem::action("Quit", Quit),
        ],
    }]);
}

/// Opens the billing window for a new bill built from `config`.
pub fn open_main_window(
    config: &AppConfig,
    app_cx: &mut App,
) -> Result<()> {
    let prefs = WindowPreferences::from(&config.window);
    let draft = BillDraft::new(config.line_items.clone(), &config.summary);
    let currency = config.summary.currency();
    let title = prefs.title.clone();

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None, prefs.size, app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(title.clone()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, move |window, cx| {
        let panel = cx.new(|panel_cx: &mut Context<BillPanel>| {
            BillPanel::new(draft, currency, window, panel_cx)
        });
        let app_window = cx.new(|window_cx: &mut Context<AppWindow>| {
            let mut app_window = AppWindow::new(title, window_cx);
            app_window.set_content(build_main_content(panel));
            app_window
        });
        cx.new(|root_cx| Root::new(app_window, window, root_cx))
    })?;

    info!(
        title = %prefs.title,
        width = ?prefs.size.width,
        height = ?prefs.size.height,
        "billing window opened"
    );
    Ok(())
}

/// Builds the primary window content.
///
/// Returns a closure suitable for passing to `AppWindow::set_content`,
/// producing the bill panel on each render frame.
pub fn build_main_content(panel: Entity<BillPanel>) -> impl Fn() -> AnyElement + 'static {
    move || panel.clone().into_any_element()
}
