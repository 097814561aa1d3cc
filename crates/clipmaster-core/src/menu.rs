//! Tray menu view model.
//!
//! The store produces a [`MenuModel`]; the shell turns it into native menu
//! items. Entry ids are plain strings so they survive the trip through the
//! native menu and come back as a [`MenuAction`].

use serde::Serialize;

use crate::clipping::Clipping;

pub const NEW_CLIPPING_ID: &str = "new_clipping";
pub const QUIT_ID: &str = "quit";
const CLIPPING_ID_PREFIX: &str = "clipping:";

pub const NEW_CLIPPING_LABEL: &str = "Create New Clipping";
pub const NEW_CLIPPING_ACCELERATOR: &str = "CmdOrCtrl+Shift+C";
pub const QUIT_LABEL: &str = "Quit";
pub const QUIT_ACCELERATOR: &str = "CmdOrCtrl+Q";

/// Highest index that still gets a positional accelerator (`CmdOrCtrl+9`)
const MAX_ACCELERATOR_INDEX: usize = 9;

/// What clicking a menu entry asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewClipping,
    /// Write the clipping at this history index back to the clipboard
    Copy(usize),
    Quit,
}

impl MenuAction {
    pub fn id(&self) -> String {
        match self {
            MenuAction::NewClipping => NEW_CLIPPING_ID.to_string(),
            MenuAction::Copy(index) => format!("{}{}", CLIPPING_ID_PREFIX, index),
            MenuAction::Quit => QUIT_ID.to_string(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            NEW_CLIPPING_ID => Some(MenuAction::NewClipping),
            QUIT_ID => Some(MenuAction::Quit),
            _ => id
                .strip_prefix(CLIPPING_ID_PREFIX)
                .and_then(|index| index.parse().ok())
                .map(MenuAction::Copy),
        }
    }
}

/// One clipping as shown in the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemView {
    pub index: usize,
    /// Possibly truncated display text
    pub label: String,
    /// Full text written back on click
    pub text: String,
    pub accelerator: Option<String>,
}

impl MenuItemView {
    pub fn new(index: usize, clipping: &Clipping, label_chars: usize) -> Self {
        Self {
            index,
            label: clipping.label(label_chars),
            text: clipping.text().to_string(),
            accelerator: accelerator_for(index),
        }
    }

    pub fn action(&self) -> MenuAction {
        MenuAction::Copy(self.index)
    }
}

/// `CmdOrCtrl+<index>` for indices 0 through 9
pub fn accelerator_for(index: usize) -> Option<String> {
    (index <= MAX_ACCELERATOR_INDEX).then(|| format!("CmdOrCtrl+{}", index))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Action {
        id: String,
        label: String,
        accelerator: Option<String>,
    },
    Separator,
}

impl MenuEntry {
    fn action(action: MenuAction, label: &str, accelerator: Option<String>) -> Self {
        MenuEntry::Action {
            id: action.id(),
            label: label.to_string(),
            accelerator,
        }
    }
}

impl From<&MenuItemView> for MenuEntry {
    fn from(item: &MenuItemView) -> Self {
        MenuEntry::action(item.action(), &item.label, item.accelerator.clone())
    }
}

/// The complete tray menu: fixed "new clipping" entry, the clippings, and
/// the fixed "quit" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuModel {
    pub entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn new(items: &[MenuItemView]) -> Self {
        let mut entries = Vec::with_capacity(items.len() + 4);
        entries.push(MenuEntry::action(
            MenuAction::NewClipping,
            NEW_CLIPPING_LABEL,
            Some(NEW_CLIPPING_ACCELERATOR.to_string()),
        ));
        entries.push(MenuEntry::Separator);
        entries.extend(items.iter().map(MenuEntry::from));
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::action(
            MenuAction::Quit,
            QUIT_LABEL,
            Some(QUIT_ACCELERATOR.to_string()),
        ));
        Self { entries }
    }

    /// Number of clipping entries, excluding the fixed ones
    pub fn clipping_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| match entry {
                MenuEntry::Action { id, .. } => {
                    matches!(MenuAction::from_id(id), Some(MenuAction::Copy(_)))
                }
                MenuEntry::Separator => false,
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids_round_trip() {
        for action in [MenuAction::NewClipping, MenuAction::Copy(7), MenuAction::Quit] {
            assert_eq!(MenuAction::from_id(&action.id()), Some(action));
        }
    }

    #[test]
    fn test_unknown_ids_rejected() {
        assert_eq!(MenuAction::from_id("settings"), None);
        assert_eq!(MenuAction::from_id("clipping:"), None);
        assert_eq!(MenuAction::from_id("clipping:x"), None);
    }

    #[test]
    fn test_accelerators_only_for_first_ten() {
        assert_eq!(accelerator_for(0).as_deref(), Some("CmdOrCtrl+0"));
        assert_eq!(accelerator_for(9).as_deref(), Some("CmdOrCtrl+9"));
        assert_eq!(accelerator_for(10), None);
    }

    #[test]
    fn test_empty_model_has_fixed_entries() {
        let model = MenuModel::new(&[]);
        assert_eq!(model.entries.len(), 4);
        assert_eq!(model.clipping_count(), 0);
        assert!(matches!(
            &model.entries[0],
            MenuEntry::Action { id, .. } if id == NEW_CLIPPING_ID
        ));
        assert!(matches!(
            model.entries.last(),
            Some(MenuEntry::Action { id, .. }) if id == QUIT_ID
        ));
    }

    #[test]
    fn test_model_keeps_item_order() {
        let items = vec![
            MenuItemView::new(0, &Clipping::new("newest"), 20),
            MenuItemView::new(1, &Clipping::new("older"), 20),
        ];
        let model = MenuModel::new(&items);
        assert_eq!(model.clipping_count(), 2);
        assert_eq!(
            model.entries[2],
            MenuEntry::Action {
                id: "clipping:0".to_string(),
                label: "newest".to_string(),
                accelerator: Some("CmdOrCtrl+0".to_string()),
            }
        );
        assert!(matches!(&model.entries[3], MenuEntry::Action { label, .. } if label == "older"));
    }
}
