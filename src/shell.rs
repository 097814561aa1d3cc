//! Tauri side of Clipmaster
//!
//! Adapts the clipboard plugin, the tray menu, the global shortcut plugin and
//! the notification plugin to the store's collaborator traits, and routes
//! every trigger through [`dispatch`] on the main thread.

pub mod clipboard;
pub mod notify;
pub mod shortcuts;
pub mod tray;

use std::sync::Mutex;

use clipmaster_core::{AppEvent, ClippingStore, Dispatch, Notifier, Settings, SilentNotifier};
use log::{error, info, warn};
use tauri::{AppHandle, Manager};

use clipboard::TauriClipboard;
use notify::DesktopNotifier;
use tray::{MenuHandle, TrayMenuRenderer};

/// Build the tray, the store and the shortcuts. Failures are logged and the
/// app keeps running with whatever could be set up.
pub fn init(app: &AppHandle, settings: &Settings) {
    if let Err(e) = tray::build_tray(app, &settings.tooltip) {
        error!("[Shell] Failed to create tray icon: {}", e);
    }
    tray::prepare_popup_window(app);

    let menu_handle = MenuHandle::default();
    let notifier: Box<dyn Notifier> = if settings.notifications {
        Box::new(DesktopNotifier::new(app.clone()))
    } else {
        Box::new(SilentNotifier)
    };
    let store = ClippingStore::new(
        Box::new(TauriClipboard::new(app.clone())),
        Box::new(TrayMenuRenderer::new(app.clone(), menu_handle.clone())),
        notifier,
        settings.menu,
    );
    store.refresh_menu();

    app.manage(menu_handle);
    app.manage(Mutex::new(store));

    shortcuts::register_all(app, &settings.hotkeys);
    info!("[Shell] Clipmaster ready");
}

/// Hand one trigger to the store and carry out what it asks the shell to do.
/// Must run on the main thread: the store lock is held while the tray menu
/// is rebuilt.
pub fn dispatch(app: &AppHandle, event: AppEvent) {
    let Some(store) = app.try_state::<Mutex<ClippingStore>>() else {
        warn!("[Shell] Store not initialized, dropping {:?}", event);
        return;
    };

    let outcome = match store.lock() {
        Ok(mut guard) => guard.dispatch(event),
        Err(poisoned) => {
            warn!("[Shell] Store mutex poisoned, recovering...");
            poisoned.into_inner().dispatch(event)
        }
    };

    match outcome {
        Dispatch::Continue => {}
        Dispatch::ShowMenu => tray::show_history(app),
        Dispatch::Quit => app.exit(0),
    }
}
