//! Supported inputs and outputs, plus OCR engine availability.

use serde::Serialize;

use crate::config::Settings;
use crate::extract::ImageExtractor;
use crate::models::{InputKind, OutputFormat};

/// Result of listing what the converter accepts and produces.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedResult {
    /// Supported input extensions, sorted.
    pub inputs: Vec<InputInfo>,
    /// Output formats.
    pub formats: Vec<OutputFormat>,
    /// Whether image inputs can currently be converted.
    pub ocr: OcrStatus,
}

/// Information about a supported input extension.
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    /// The file extension (e.g., ".pdf").
    pub ext: String,
    /// The input kind it maps to.
    pub kind: InputKind,
    /// The extraction backend for that kind.
    pub backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OcrStatus {
    pub command: String,
    pub available: bool,
}

fn backend_for(kind: InputKind, ocr_command: &str) -> String {
    match kind {
        InputKind::Text => "utf-8".into(),
        InputKind::Pdf => "pdf-extract".into(),
        InputKind::Html => "tree-sitter-html".into(),
        InputKind::Image => ocr_command.into(),
    }
}

/// List supported extensions with their backends, and probe the OCR engine.
#[must_use]
pub fn list_supported(settings: &Settings) -> SupportedResult {
    let ocr = ImageExtractor::new(&settings.ocr);
    let command = ocr.command();

    let mut inputs: Vec<InputInfo> = InputKind::ALL
        .iter()
        .flat_map(|&kind| {
            kind.extensions().iter().map(move |ext| InputInfo {
                ext: format!(".{ext}"),
                kind,
                backend: backend_for(kind, command),
            })
        })
        .collect();

    // Sort by extension
    inputs.sort_by(|a, b| a.ext.cmp(&b.ext));

    SupportedResult {
        inputs,
        formats: OutputFormat::ALL.to_vec(),
        ocr: OcrStatus {
            command: command.to_string(),
            available: ocr.is_available(),
        },
    }
}
