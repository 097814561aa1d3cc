mod logging;
mod shell;

use clipmaster_core::Settings;
use log::{info, warn};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
            info!("[Clipmaster] Already running, ignoring second launch");
        }))
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_clipboard_manager::init())
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            // Menu-bar only: no Dock icon
            #[cfg(target_os = "macos")]
            app.set_activation_policy(tauri::ActivationPolicy::Accessory);

            let settings = load_settings();
            shell::init(app.handle(), &settings);
            Ok(())
        })
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Clipmaster: {}", e);
            std::process::exit(1);
        });
}

/// Settings from the config dir, or defaults when they cannot be read
fn load_settings() -> Settings {
    let path = match Settings::default_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("[Settings] {}, using defaults", e);
            return Settings::default();
        }
    };

    match tauri::async_runtime::block_on(Settings::load_or_init(&path)) {
        Ok(settings) => {
            info!("[Settings] Loaded {}", path.display());
            settings
        }
        Err(e) => {
            warn!("[Settings] Failed to load {}: {}, using defaults", path.display(), e);
            Settings::default()
        }
    }
}
