//! Clipping store
//!
//! Owns the clipping history and the collaborators it talks to. Every
//! collaborator failure is logged and swallowed: the history only changes on
//! a successful, non-duplicate clipboard read.

use log::{debug, warn};

use crate::clipping::Clipping;
use crate::config::MenuSettings;
use crate::event::{AppEvent, Dispatch, HotkeyKind};
use crate::history::ClippingHistory;
use crate::menu::{MenuAction, MenuItemView, MenuModel};
use crate::ports::{ClipboardService, MenuRenderer, Notifier};

pub struct ClippingStore {
    history: ClippingHistory,
    clipboard: Box<dyn ClipboardService>,
    renderer: Box<dyn MenuRenderer>,
    notifier: Box<dyn Notifier>,
    menu: MenuSettings,
}

impl ClippingStore {
    pub fn new(
        clipboard: Box<dyn ClipboardService>,
        renderer: Box<dyn MenuRenderer>,
        notifier: Box<dyn Notifier>,
        menu: MenuSettings,
    ) -> Self {
        Self {
            history: ClippingHistory::new(),
            clipboard,
            renderer,
            notifier,
            menu,
        }
    }

    /// Snapshot the clipboard. Returns `None` when the text is already in the
    /// history or the clipboard could not be read.
    pub fn add_clipping(&mut self) -> Option<Clipping> {
        let text = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("[ClippingStore] Failed to read clipboard: {}", e);
                return None;
            }
        };

        let Some(clipping) = self.history.push_front(text) else {
            debug!("[ClippingStore] Skipping duplicate clipping");
            return None;
        };

        debug!(
            "[ClippingStore] Added clipping ({} chars), total count: {}",
            clipping.char_count(),
            self.history.len()
        );
        self.refresh_menu();
        Some(clipping)
    }

    /// Menu items for the newest clippings, newest first
    pub fn build_menu_items(&self) -> Vec<MenuItemView> {
        self.history
            .recent(self.menu.max_items)
            .iter()
            .enumerate()
            .map(|(index, clipping)| MenuItemView::new(index, clipping, self.menu.label_chars))
            .collect()
    }

    pub fn menu_model(&self) -> MenuModel {
        MenuModel::new(&self.build_menu_items())
    }

    pub fn refresh_menu(&self) {
        if let Err(e) = self.renderer.render(&self.menu_model()) {
            warn!("[ClippingStore] Failed to rebuild menu: {}", e);
        }
    }

    /// Write the full text of the clipping at `index` back to the clipboard
    pub fn copy_to_clipboard(&self, index: usize) {
        let Some(clipping) = self.history.get(index) else {
            warn!("[ClippingStore] No clipping at index {}", index);
            return;
        };

        match self.clipboard.write_text(clipping.text()) {
            Ok(()) => debug!(
                "[ClippingStore] Copied clipping {} ({} chars) to clipboard",
                index,
                clipping.char_count()
            ),
            Err(e) => warn!("[ClippingStore] Failed to write clipboard: {}", e),
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Dispatch {
        match event {
            AppEvent::HotkeyFired(HotkeyKind::NewClipping) => {
                if let Some(clipping) = self.add_clipping() {
                    self.notifier.clipping_added(&clipping);
                }
                Dispatch::Continue
            }
            AppEvent::HotkeyFired(HotkeyKind::ShowHistory) => Dispatch::ShowMenu,
            AppEvent::MenuItemClicked(MenuAction::NewClipping) => {
                self.add_clipping();
                Dispatch::Continue
            }
            AppEvent::MenuItemClicked(MenuAction::Copy(index)) => {
                self.copy_to_clipboard(index);
                Dispatch::Continue
            }
            AppEvent::MenuItemClicked(MenuAction::Quit) => Dispatch::Quit,
        }
    }

    pub fn history(&self) -> &ClippingHistory {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
