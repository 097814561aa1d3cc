use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{ClipError, ClipResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hotkeys: HotkeySettings,
    pub menu: MenuSettings,
    /// Show a desktop notification when the hotkey captures a clipping
    pub notifications: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    pub show_history: String,
    pub new_clipping: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// How many clippings the tray menu lists
    pub max_items: usize,
    /// Label width before the ellipsis
    pub label_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkeys: HotkeySettings::default(),
            menu: MenuSettings::default(),
            notifications: true,
            tooltip: "Clipmaster".to_string(),
        }
    }
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            show_history: "CommandOrControl+Alt+C".to_string(),
            new_clipping: "CommandOrControl+Shift+Alt+C".to_string(),
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            max_items: 10,
            label_chars: 20,
        }
    }
}

impl Settings {
    pub fn default_path() -> ClipResult<PathBuf> {
        ProjectDirs::from("com", "clipmaster", "clipmaster")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| ClipError::Config("Failed to determine config directory".to_string()))
    }

    /// Read settings from `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub async fn load_or_init(path: &Path) -> ClipResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self, path: &Path) -> ClipResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tray_layout() {
        let settings = Settings::default();
        assert_eq!(settings.menu.max_items, 10);
        assert_eq!(settings.menu.label_chars, 20);
        assert_eq!(settings.hotkeys.show_history, "CommandOrControl+Alt+C");
        assert_eq!(settings.hotkeys.new_clipping, "CommandOrControl+Shift+Alt+C");
        assert!(settings.notifications);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "menu": { "max_items": 5 }, "notifications": false }"#)
                .unwrap();
        assert_eq!(settings.menu.max_items, 5);
        assert_eq!(settings.menu.label_chars, 20);
        assert!(!settings.notifications);
        assert_eq!(settings.hotkeys, HotkeySettings::default());
    }

    #[tokio::test]
    async fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings::load_or_init(&path).await.unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.tooltip = "Clips".to_string();
        settings.hotkeys.show_history = "Control+Shift+V".to_string();

        settings.save(&path).await.unwrap();
        let loaded = Settings::load_or_init(&path).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = Settings::load_or_init(&path).await.unwrap_err();
        assert!(matches!(err, ClipError::Config(_)));
    }
}
