//! Capabilities the store borrows from the host shell.

use crate::clipping::Clipping;
use crate::error::ClipResult;
use crate::menu::MenuModel;

/// System clipboard, plain text only
pub trait ClipboardService: Send {
    fn read_text(&self) -> ClipResult<String>;
    fn write_text(&self, text: &str) -> ClipResult<()>;
}

/// Rebuilds the visible context menu
pub trait MenuRenderer: Send {
    fn render(&self, model: &MenuModel) -> ClipResult<()>;
}

/// Tells the user a clipping was captured
pub trait Notifier: Send {
    fn clipping_added(&self, clipping: &Clipping);
}

/// Notifier that does nothing, for when notifications are switched off
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn clipping_added(&self, _clipping: &Clipping) {}
}
