use color_eyre::Result;
use color_eyre::eyre::eyre;

/// Clipboard collaborator used by secure fields to export plain-text values.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be accessed or written.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating-system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| eyre!("Failed to access clipboard: {}", e))?;
            self.inner = Some(clipboard);
        }
        let clipboard = self.inner.as_mut().ok_or_else(|| eyre!("Clipboard unavailable"))?;
        clipboard
            .set_text(text)
            .map_err(|e| eyre!("Failed to copy to clipboard: {}", e))
    }
}
