//! Error type shared by the store, its collaborators and the settings layer.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ClipError {
    /// Reading or writing the system clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Building or installing the tray menu failed
    #[error("Menu error: {0}")]
    Menu(String),

    /// A global shortcut could not be parsed or registered
    #[error("Hotkey error: {0}")]
    Hotkey(String),

    /// Settings could not be located or parsed
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ClipError {
    fn from(err: std::io::Error) -> Self {
        ClipError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClipError {
    fn from(err: serde_json::Error) -> Self {
        ClipError::Config(format!("JSON error: {}", err))
    }
}

pub type ClipResult<T> = Result<T, ClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_tag() {
        let err = ClipError::Hotkey("CommandOrControl+Alt+C taken".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Hotkey");
        assert_eq!(json["message"], "CommandOrControl+Alt+C taken");
    }

    #[test]
    fn test_json_error_maps_to_config() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ClipError::from(parse_err), ClipError::Config(_)));
    }
}
