use crate::menu::MenuAction;

/// Which global shortcut fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyKind {
    /// Snapshot the clipboard into the history
    NewClipping,
    /// Pop the history menu up
    ShowHistory,
}

/// External trigger delivered to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    HotkeyFired(HotkeyKind),
    MenuItemClicked(MenuAction),
}

/// What the shell has to do after the store handled an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    ShowMenu,
    Quit,
}
