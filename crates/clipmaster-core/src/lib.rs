//! Clipmaster core
//!
//! Framework-free half of the tray app:
//! - `store`: the clipping history and the menu view derived from it
//! - `menu`: the tray menu model handed to the shell
//! - `ports`: clipboard, menu and notification capabilities the shell provides
//! - `config`: user settings persisted as JSON

pub mod clipping;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod menu;
pub mod ports;
pub mod store;

pub use clipping::Clipping;
pub use config::{HotkeySettings, MenuSettings, Settings};
pub use error::{ClipError, ClipResult};
pub use event::{AppEvent, Dispatch, HotkeyKind};
pub use history::ClippingHistory;
pub use menu::{MenuAction, MenuEntry, MenuItemView, MenuModel};
pub use ports::{ClipboardService, MenuRenderer, Notifier, SilentNotifier};
pub use store::ClippingStore;
