use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error(
        "unsupported file type '{ext}'. Supported types: .txt, .pdf, .html, .htm, .png, .jpg, .jpeg"
    )]
    UnsupportedType { ext: String },

    #[error("unsupported output format '{format}'. Supported: json, csv")]
    UnsupportedFormat { format: String },

    #[error("could not extract text from {}: {detail}", path.display())]
    Extraction { path: PathBuf, detail: String },

    #[error("OCR engine '{command}' is not installed or not in PATH")]
    OcrUnavailable { command: String },

    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl ConvertError {
    pub(crate) fn extraction(path: &std::path::Path, detail: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
