//! Image OCR extractor.
//!
//! Decodes the image with the `image` crate, then runs an external OCR
//! engine (tesseract by default) over it and returns the recognized text.

use std::path::Path;
use std::process::Command;

use crate::config::OcrSettings;
use crate::error::{ConvertError, Result};
use crate::extract::Extractor;
use crate::models::InputKind;

pub struct ImageExtractor {
    command: String,
    language: Option<String>,
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self::new(&OcrSettings::default())
    }
}

impl ImageExtractor {
    #[must_use]
    pub fn new(settings: &OcrSettings) -> Self {
        Self {
            command: settings.command.clone(),
            language: settings.language.clone(),
        }
    }

    /// The OCR executable this extractor runs.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Check if the OCR engine can be launched.
    #[must_use]
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stdout.is_empty() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn unavailable(&self) -> ConvertError {
        ConvertError::OcrUnavailable {
            command: self.command.clone(),
        }
    }

    fn run_ocr(&self, path: &Path) -> Result<String> {
        let mut cmd = Command::new(&self.command);
        cmd.arg(path).arg("stdout");
        if let Some(lang) = &self.language {
            cmd.arg("-l").arg(lang);
        }

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                self.unavailable()
            } else {
                ConvertError::extraction(path, format!("failed to run {}: {e}", self.command))
            }
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::extraction(
                path,
                format!("{} exited with code {code}: {}", self.command, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Extractor for ImageExtractor {
    fn kind(&self) -> InputKind {
        InputKind::Image
    }

    /// Probe the engine, check the file decodes as an image, then OCR it.
    ///
    /// The decoded pixels are not handed to the engine; decoding only rejects
    /// corrupt or mislabelled files before the engine is spawned.
    fn try_extract(&self, path: &Path) -> Result<String> {
        if !self.is_available() {
            return Err(self.unavailable());
        }

        image::open(path)
            .map_err(|e| ConvertError::extraction(path, format!("failed to decode image: {e}")))?;

        let text = self.run_ocr(path)?;
        if text.is_empty() {
            tracing::info!(path = %path.display(), "OCR recognized no text");
        }
        Ok(text)
    }
}
