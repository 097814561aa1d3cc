//! Tray icon and its context menu.

use std::sync::{Arc, Mutex};

use clipmaster_core::{AppEvent, ClipError, ClipResult, MenuAction, MenuEntry, MenuModel, MenuRenderer};
use log::{debug, warn};
use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    AppHandle, Manager, PhysicalPosition, WindowEvent, Wry,
};

pub const TRAY_ID: &str = "main";

/// Hidden 1x1 window the history menu is popped up from
pub const POPUP_WINDOW: &str = "popup";

/// Last menu installed on the tray, kept for the show-history shortcut
#[derive(Clone, Default)]
pub struct MenuHandle(Arc<Mutex<Option<Menu<Wry>>>>);

impl MenuHandle {
    fn set(&self, menu: Menu<Wry>) {
        let mut current = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = Some(menu);
    }

    fn current(&self) -> Option<Menu<Wry>> {
        match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Create the tray icon. The menu is installed later by [`TrayMenuRenderer`].
pub fn build_tray(app: &AppHandle, tooltip: &str) -> tauri::Result<()> {
    let mut builder = TrayIconBuilder::with_id(TRAY_ID)
        .tooltip(tooltip)
        .show_menu_on_left_click(true)
        .on_menu_event(|app, event| match MenuAction::from_id(event.id().as_ref()) {
            Some(action) => super::dispatch(app, AppEvent::MenuItemClicked(action)),
            None => warn!("[Tray] Unknown menu item: {}", event.id().as_ref()),
        });

    match app.default_window_icon() {
        Some(icon) => builder = builder.icon(icon.clone()),
        None => warn!("[Tray] No default window icon, tray icon will be blank"),
    }

    builder.build(app)?;
    Ok(())
}

fn build_menu(app: &AppHandle, model: &MenuModel) -> tauri::Result<Menu<Wry>> {
    let menu = Menu::new(app)?;
    for entry in &model.entries {
        match entry {
            MenuEntry::Action {
                id,
                label,
                accelerator,
            } => {
                let item = MenuItem::with_id(app, id.as_str(), label, true, accelerator.as_deref())?;
                menu.append(&item)?;
            }
            MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator(app)?)?,
        }
    }
    Ok(menu)
}

/// Installs menus built from the store's model on the tray icon
pub struct TrayMenuRenderer {
    app: AppHandle,
    handle: MenuHandle,
}

impl TrayMenuRenderer {
    pub fn new(app: AppHandle, handle: MenuHandle) -> Self {
        Self { app, handle }
    }
}

impl MenuRenderer for TrayMenuRenderer {
    fn render(&self, model: &MenuModel) -> ClipResult<()> {
        let menu = build_menu(&self.app, model)
            .map_err(|e| ClipError::Menu(format!("Failed to build menu: {}", e)))?;

        let tray = self
            .app
            .tray_by_id(TRAY_ID)
            .ok_or_else(|| ClipError::Menu("Tray icon not found".to_string()))?;
        tray.set_menu(Some(menu.clone()))
            .map_err(|e| ClipError::Menu(format!("Failed to set tray menu: {}", e)))?;

        self.handle.set(menu);
        debug!("[Tray] Menu rebuilt with {} clippings", model.clipping_count());
        Ok(())
    }
}

/// Hide the popup window again whenever it loses focus
pub fn prepare_popup_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(POPUP_WINDOW) else {
        warn!("[Tray] Window '{}' missing, show-history shortcut disabled", POPUP_WINDOW);
        return;
    };
    let window_clone = window.clone();
    window.on_window_event(move |event| {
        if let WindowEvent::Focused(false) = event {
            let _ = window_clone.hide();
        }
    });
}

/// Round the cursor to the pixel the popup window is moved to
fn popup_position(cursor: PhysicalPosition<f64>) -> PhysicalPosition<i32> {
    PhysicalPosition::new(cursor.x.round() as i32, cursor.y.round() as i32)
}

/// Pop the current history menu up at the cursor. Menus popped from an
/// invisible window are dropped on macOS and Windows, so the 1x1 window is
/// moved under the cursor and shown for the duration of the popup.
pub fn show_history(app: &AppHandle) {
    let Some(menu) = app.state::<MenuHandle>().current() else {
        debug!("[Tray] No menu rendered yet");
        return;
    };
    let Some(window) = app.get_webview_window(POPUP_WINDOW) else {
        warn!("[Tray] Window '{}' missing, cannot show history", POPUP_WINDOW);
        return;
    };

    match window.cursor_position() {
        Ok(cursor) => {
            if let Err(e) = window.set_position(popup_position(cursor)) {
                debug!("[Tray] Failed to move popup window: {}", e);
            }
        }
        Err(e) => debug!("[Tray] Cursor position unavailable: {}", e),
    }
    if let Err(e) = window.show().and_then(|_| window.set_focus()) {
        warn!("[Tray] Failed to show popup window: {}", e);
    }

    if let Err(e) = window.popup_menu(&menu) {
        warn!("[Tray] Failed to pop up history menu: {}", e);
    }

    // popup_menu blocks until dismissal here; GTK returns at once and the
    // focus handler hides the window instead
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    let _ = window.hide();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_position_rounds_cursor() {
        let position = popup_position(PhysicalPosition::new(100.4, 250.6));
        assert_eq!(position, PhysicalPosition::new(100, 251));
    }

    #[test]
    fn test_popup_position_keeps_negative_monitors() {
        let position = popup_position(PhysicalPosition::new(-1920.0, 12.0));
        assert_eq!(position, PhysicalPosition::new(-1920, 12));
    }
}
