//! Best-effort clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard. If no clipboard is reachable every copy fails, and
/// callers fall back to showing the password for manual copying.
pub struct SystemClipboard {
    ctx: Result<ClipboardContext, String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            ctx: ClipboardContext::new().map_err(|e| e.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.ctx.is_ok()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        match self.ctx.as_mut() {
            Ok(ctx) => ctx.set_contents(text.to_owned()).map_err(|e| e.to_string()),
            Err(reason) => Err(reason.clone()),
        }
    }
}
