use clipmaster_core::clipping::truncate_label;
use clipmaster_core::{Clipping, Notifier};
use log::warn;
use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

pub const NOTIFICATION_TITLE: &str = "Clipping Added";

/// Longest clipping shown in a notification body before the ellipsis
const BODY_CHARS: usize = 100;

/// Desktop notification through the notification plugin
pub struct DesktopNotifier {
    app: AppHandle,
}

impl DesktopNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

fn notification_body(clipping: &Clipping) -> String {
    truncate_label(clipping.text(), BODY_CHARS)
}

impl Notifier for DesktopNotifier {
    fn clipping_added(&self, clipping: &Clipping) {
        if let Err(e) = self
            .app
            .notification()
            .builder()
            .title(NOTIFICATION_TITLE)
            .body(notification_body(clipping))
            .show()
        {
            warn!("[Notifier] Failed to show clipping notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_keeps_short_clipping() {
        let clipping = Clipping::new("copied text");
        assert_eq!(notification_body(&clipping), "copied text");
    }

    #[test]
    fn test_body_truncates_long_clipping() {
        let clipping = Clipping::new("x".repeat(250));
        let body = notification_body(&clipping);
        assert_eq!(body.chars().count(), BODY_CHARS + 1);
        assert!(body.ends_with('…'));
    }
}
