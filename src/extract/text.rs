use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::extract::Extractor;
use crate::models::InputKind;

/// Plain text extractor: the file's UTF-8 contents, unchanged.
pub struct TextExtractor;

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for TextExtractor {
    fn kind(&self) -> InputKind {
        InputKind::Text
    }

    fn try_extract(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| ConvertError::extraction(path, format!("failed to read text file: {e}")))
    }
}
