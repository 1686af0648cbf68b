use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::report::load_saved_codes;

/// Cursor over a saved code list, clamped to the list bounds
#[derive(Debug, Clone)]
pub struct CodePlayer {
    codes: Vec<String>,
    position: usize,
    status: String,
}

impl CodePlayer {
    /// Start at the first code; an empty list is rejected
    pub fn new(codes: Vec<String>) -> Result<Self> {
        if codes.is_empty() {
            return Err(Error::EmptyCodeList);
        }
        let status = format!("File loaded successfully! {} codes found.", codes.len());
        Ok(Self {
            codes,
            position: 0,
            status,
        })
    }

    /// Load a list written by `save_codes_to_file`
    pub fn from_file(path: &Path) -> Result<Self> {
        let codes = load_saved_codes(path)?;
        debug!("Loaded {} code(s) from {}", codes.len(), path.display());
        Self::new(codes)
    }

    pub fn current(&self) -> &str {
        &self.codes[self.position]
    }

    /// Zero-based index of the current code
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.position + 1 == self.codes.len()
    }

    /// Advance one code, staying on the last one
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &str {
        if !self.is_finished() {
            self.position += 1;
        }
        self.update_status();
        self.current()
    }

    /// Step back one code, staying on the first one
    pub fn previous(&mut self) -> &str {
        self.position = self.position.saturating_sub(1);
        self.update_status();
        self.current()
    }

    pub fn reset(&mut self) -> &str {
        self.position = 0;
        self.status = "Reset to beginning".to_string();
        self.current()
    }

    /// Jump to a zero-based position, clamped to the last code
    pub fn seek(&mut self, position: usize) -> &str {
        self.position = position.min(self.codes.len() - 1);
        self.update_status();
        self.current()
    }

    fn update_status(&mut self) {
        self.status = if self.is_finished() {
            "Finished! All codes displayed.".to_string()
        } else {
            format!("Position {} of {}", self.position + 1, self.codes.len())
        };
    }
}
