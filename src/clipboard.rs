use anyhow::{anyhow, Result};

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, kept open for the lifetime of the tray so the
/// selection survives on X11.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("Clipboard unavailable, will retry on first copy: {}", e);
                None
            }
        };
        Self { inner }
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| anyhow!("Failed to access clipboard: {}", e))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard not initialized"))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard()?
            .set_text(text)
            .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))
    }
}
