use clipmaster_core::{ClipError, ClipResult, ClipboardService};
use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

/// System clipboard through Tauri's clipboard manager
pub struct TauriClipboard {
    app: AppHandle,
}

impl TauriClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardService for TauriClipboard {
    fn read_text(&self) -> ClipResult<String> {
        self.app
            .clipboard()
            .read_text()
            .map_err(|e| ClipError::Clipboard(format!("Failed to read clipboard: {}", e)))
    }

    fn write_text(&self, text: &str) -> ClipResult<()> {
        self.app
            .clipboard()
            .write_text(text)
            .map_err(|e| ClipError::Clipboard(format!("Failed to write to clipboard: {}", e)))
    }
}
