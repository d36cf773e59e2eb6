use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, Settings};
use crate::error::{ConvertError, Result};
use crate::extract::{Extractor, HtmlExtractor, ImageExtractor, PdfExtractor, TextExtractor};
use crate::models::kind::extension_of;
use crate::models::{InputKind, OutputFormat};
use crate::serialize;

/// Outcome of one conversion: the output path on success, the error message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub success: bool,
    pub message: String,
}

impl ConversionResult {
    #[must_use]
    pub fn into_tuple(self) -> (bool, String) {
        (self.success, self.message)
    }
}

impl From<Result<PathBuf>> for ConversionResult {
    fn from(result: Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                message: path.display().to_string(),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

/// Routes input files to the extractor for their kind and writes the serialized output.
pub struct Converter {
    extractors: HashMap<InputKind, Box<dyn Extractor>>,
    default_output_dir: Option<PathBuf>,
}

impl Converter {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let mut extractors: HashMap<InputKind, Box<dyn Extractor>> = HashMap::new();
        extractors.insert(InputKind::Text, Box::new(TextExtractor::new()));
        extractors.insert(InputKind::Pdf, Box::new(PdfExtractor::new()));
        extractors.insert(InputKind::Html, Box::new(HtmlExtractor::new()));
        extractors.insert(InputKind::Image, Box::new(ImageExtractor::new(&settings.ocr)));

        Self {
            extractors,
            default_output_dir: settings.output.directory.clone(),
        }
    }

    /// Replace the extractor registered for its kind.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractors.insert(extractor.kind(), extractor);
        self
    }

    /// Check if a file's extension has an extractor.
    #[must_use]
    pub fn supports(&self, path: &Path) -> bool {
        InputKind::from_path(path).is_some_and(|kind| self.extractors.contains_key(&kind))
    }

    fn extractor_for(&self, path: &Path) -> Result<&dyn Extractor> {
        InputKind::from_path(path)
            .and_then(|kind| self.extractors.get(&kind))
            .map(|extractor| &**extractor)
            .ok_or_else(|| {
                let ext = extension_of(path);
                ConvertError::UnsupportedType {
                    ext: if ext.is_empty() { ext } else { format!(".{ext}") },
                }
            })
    }

    /// Convert `input` to `format`, returning the path of the written output file.
    ///
    /// Output lands in `output_dir` (created when absent), else the configured
    /// default directory, else next to the input.
    pub fn convert(
        &self,
        input: &Path,
        format: &str,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf> {
        if !input.exists() {
            return Err(ConvertError::NotFound {
                path: input.to_path_buf(),
            });
        }

        let extractor = self.extractor_for(input)?;
        let format: OutputFormat = format.parse()?;
        let kind = extractor.kind();

        tracing::info!(input = %input.display(), %kind, %format, "converting");
        let text = extractor.try_extract(input)?;

        if text.trim().is_empty() {
            if kind == InputKind::Image {
                tracing::info!("no text recognized in {}; output will be empty", input.display());
            } else {
                tracing::warn!(
                    "no text content found in {}; output will be empty",
                    input.display()
                );
            }
        }

        let output_dir = output_dir.or(self.default_output_dir.as_deref());
        let output_path = output_path_for(input, format, output_dir);
        if let Some(dir) = output_dir {
            std::fs::create_dir_all(dir).map_err(|source| ConvertError::Write {
                path: output_path.clone(),
                source,
            })?;
        }

        let data = serialize::serialize(format, &text)?;
        std::fs::write(&output_path, data).map_err(|source| ConvertError::Write {
            path: output_path.clone(),
            source,
        })?;

        tracing::info!(output = %output_path.display(), "wrote output");
        Ok(output_path)
    }

    /// Convert and fold the outcome into a [`ConversionResult`].
    #[must_use]
    pub fn convert_file(
        &self,
        input: &Path,
        format: &str,
        output_dir: Option<&Path>,
    ) -> ConversionResult {
        self.convert(input, format, output_dir).into()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// `<output_dir or input's directory>/<input stem>.<format>`.
#[must_use]
pub fn output_path_for(input: &Path, format: OutputFormat, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir.unwrap_or_else(|| input.parent().unwrap_or_else(|| Path::new("")));
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    dir.join(format!("{stem}.{}", format.extension()))
}

/// Convert a single file using the configuration of the working directory.
///
/// Returns `(true, output_path)` on success and `(false, error_message)` otherwise.
#[must_use]
pub fn convert_file(input: &Path, format: &str, output_dir: Option<&Path>) -> (bool, String) {
    let settings = match Config::from_cwd() {
        Ok(config) => config.settings,
        Err(e) => return (false, e.to_string()),
    };
    Converter::new(&settings)
        .convert_file(input, format, output_dir)
        .into_tuple()
}
