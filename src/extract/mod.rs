//! Format-specific text extractors.
//!
//! Each extractor turns one kind of input file into plain text. The fallible
//! [`Extractor::try_extract`] is what the converter calls; [`Extractor::extract`]
//! is the tolerant variant that logs the failure and yields an empty string.

pub mod html;
pub mod image;
pub mod pdf;
pub mod text;

use std::path::Path;

use crate::error::Result;
use crate::models::InputKind;

pub use html::HtmlExtractor;
pub use self::image::ImageExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

/// Trait for text extraction backends, one per input kind.
pub trait Extractor: Send + Sync {
    /// The input kind this extractor handles.
    fn kind(&self) -> InputKind;

    /// Extract the textual content of the file at `path`.
    fn try_extract(&self, path: &Path) -> Result<String>;

    /// Extract text, logging any failure and returning an empty string instead.
    fn extract(&self, path: &Path) -> String {
        match self.try_extract(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(kind = %self.kind(), path = %path.display(), "{e}");
                String::new()
            }
        }
    }
}
