use tracing::warn;

/// Write-only clipboard. Writes are best effort and never fail the caller.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str);
}

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => {
                    warn!(error = %e, "clipboard unavailable");
                    return None;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        if let Some(clipboard) = self.handle()
            && let Err(e) = clipboard.set_text(text)
        {
            warn!(error = %e, "clipboard write failed");
        }
    }
}
