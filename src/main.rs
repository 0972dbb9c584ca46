#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod api;
mod chat;
mod citations;
pub mod icons;
pub mod logger;
mod pdf_viewer;
mod store;
mod typing;

use chat::Documind;
use gpui::*;
use gpui_component::*;
use std::sync::Arc;

#[cfg(target_os = "linux")]
const DOCUMIND_LINUX_BACKEND_ENV: &str = "DOCUMIND_LINUX_BACKEND";

gpui::actions!(
    documind,
    [EnableLoggingMenu, DisableLoggingMenu, OpenLogsMenu]
);

pub(crate) fn configure_app_menus(cx: &mut App) {
    let mut items = Vec::new();

    if logger::file_logging_enabled() {
        items.extend([
            MenuItem::action("Open Logs", OpenLogsMenu),
            MenuItem::separator(),
            MenuItem::action("Disable Logging", DisableLoggingMenu),
        ]);
    } else {
        items.push(MenuItem::action("Enable Logging", EnableLoggingMenu));
    }

    cx.set_menus(vec![Menu {
        name: "Documind".into(),
        items,
    }]);
}

#[cfg(target_os = "linux")]
fn running_inside_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() || std::env::var_os("WSL_INTEROP").is_some() {
        return true;
    }

    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.to_ascii_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn has_non_empty_env(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|value| !value.is_empty())
}

#[cfg(target_os = "linux")]
fn configure_linux_display_backend() {
    let requested_backend = std::env::var(DOCUMIND_LINUX_BACKEND_ENV)
        .ok()
        .map(|value| value.trim().to_ascii_lowercase());

    match requested_backend.as_deref() {
        Some("wayland") => {
            crate::debug_log!(
                "[linux] backend override: {}=wayland",
                DOCUMIND_LINUX_BACKEND_ENV
            );
            return;
        }
        Some("x11") => {
            if has_non_empty_env("WAYLAND_DISPLAY") {
                // Safe here: this runs before any threads are spawned.
                unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
            }
            crate::debug_log!(
                "[linux] backend override: {}=x11",
                DOCUMIND_LINUX_BACKEND_ENV
            );
            return;
        }
        Some("auto") | None => {}
        Some(other) => {
            crate::debug_log!(
                "[linux] invalid {} value '{}', expected auto/x11/wayland; using auto",
                DOCUMIND_LINUX_BACKEND_ENV,
                other
            );
        }
    }

    if running_inside_wsl() && has_non_empty_env("WAYLAND_DISPLAY") && has_non_empty_env("DISPLAY")
    {
        // Safe here: this runs before any threads are spawned.
        unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
        crate::debug_log!(
            "[linux] detected WSL with DISPLAY and WAYLAND_DISPLAY; forcing X11. set {}=wayland to override",
            DOCUMIND_LINUX_BACKEND_ENV
        );
    }
}

fn load_saved_window_size() -> Option<(f32, f32)> {
    let tree = store::open_window_size_tree()?;
    store::load_window_size(&tree)
}

fn main() {
    logger::initialize();
    #[cfg(target_os = "linux")]
    configure_linux_display_backend();

    let api = match api::ApiClient::new() {
        Ok(api) => Arc::new(api),
        Err(err) => {
            eprintln!("failed to create backend client: {err:#}");
            return;
        }
    };

    let app = Application::new().with_assets(icons::Assets);

    app.run(move |cx| {
        configure_app_menus(cx);

        gpui_component::init(cx);
        Theme::change(cx.window_appearance(), None, cx);
        #[cfg(target_os = "macos")]
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            let saved_window_bounds = if let Some((w, h)) = load_saved_window_size() {
                Some(cx.update(|app| WindowBounds::centered(size(px(w), px(h)), app))?)
            } else {
                None
            };

            let window_options = WindowOptions {
                titlebar: Some(TitleBar::title_bar_options()),
                window_decorations: Some(WindowDecorations::Client),
                window_bounds: saved_window_bounds,
                ..WindowOptions::default()
            };

            cx.open_window(window_options, move |window, cx| {
                let view = cx.new(|cx| Documind::new(api.clone(), window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();

        cx.activate(true);
    });
}
