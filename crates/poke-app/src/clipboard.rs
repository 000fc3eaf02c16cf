//! Clipboard access behind a trait
//!
//! The clipboard is an external shared resource touched transiently for
//! settings export/import; no lock is held across an operation, and another
//! process may rewrite it between an export and a later import. The trait
//! keeps the controllers testable without a display server.

use poke_core::{PokeError, Result};

pub trait Clipboard {
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The real system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| PokeError::Clipboard(format!("Clipboard unavailable: {}", e)))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.inner
            .get_text()
            .map_err(|e| PokeError::Clipboard(format!("Failed to read clipboard: {}", e)))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| PokeError::Clipboard(format!("Failed to write clipboard: {}", e)))
    }
}

/// In-memory clipboard for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load contents, as if another process had written them.
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| PokeError::Clipboard("Clipboard is empty".into()))
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
