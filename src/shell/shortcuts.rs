use clipmaster_core::{AppEvent, ClipError, ClipResult, HotkeyKind, HotkeySettings};
use log::{error, info, warn};
use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

/// Register both global shortcuts. A shortcut that fails stays unavailable
/// for the session; the other one is still registered.
pub fn register_all(app: &AppHandle, hotkeys: &HotkeySettings) {
    register(app, &hotkeys.new_clipping, HotkeyKind::NewClipping);
    register(app, &hotkeys.show_history, HotkeyKind::ShowHistory);
}

fn register(app: &AppHandle, accelerator: &str, kind: HotkeyKind) {
    match try_register(app, accelerator, kind) {
        Ok(()) => info!("[Shortcuts] Registered {:?} shortcut: {}", kind, accelerator),
        Err(e) => error!("[Shortcuts] {:?} shortcut unavailable: {}", kind, e),
    }
}

fn try_register(app: &AppHandle, accelerator: &str, kind: HotkeyKind) -> ClipResult<()> {
    let shortcut: Shortcut = accelerator
        .parse()
        .map_err(|e| ClipError::Hotkey(format!("Failed to parse '{}': {}", accelerator, e)))?;

    // Clean slate in case a previous run left it bound to us
    if app.global_shortcut().is_registered(shortcut) {
        app.global_shortcut()
            .unregister(shortcut)
            .map_err(|e| ClipError::Hotkey(e.to_string()))?;
    }

    app.global_shortcut()
        .on_shortcut(shortcut, move |app, _shortcut, event| {
            // Hotkeys fire off the main thread on Linux; menu events and
            // tray updates all live on the main thread
            if event.state() == ShortcutState::Pressed {
                let handle = app.clone();
                if let Err(e) = app.run_on_main_thread(move || {
                    super::dispatch(&handle, AppEvent::HotkeyFired(kind))
                }) {
                    warn!("[Shortcuts] Failed to hand {:?} to the main thread: {}", kind, e);
                }
            }
        })
        .map_err(|e| ClipError::Hotkey(format!("Failed to register '{}': {}", accelerator, e)))
}
