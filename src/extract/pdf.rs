use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::extract::Extractor;
use crate::models::InputKind;

/// Page-based PDF text extractor.
pub struct PdfExtractor;

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PdfExtractor {
    fn kind(&self) -> InputKind {
        InputKind::Pdf
    }

    fn try_extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .map_err(|e| ConvertError::extraction(path, format!("failed to read PDF: {e}")))?;

        // pdf-extract panics on some malformed documents
        let extracted =
            std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
                .map_err(|_| {
                    ConvertError::extraction(path, "PDF extraction aborted on a malformed document")
                })?;
        let pages = extracted
            .map_err(|e| ConvertError::extraction(path, format!("PDF extraction error: {e}")))?;

        let page_count = pages.len();
        let text = join_pages(pages);
        tracing::debug!(
            path = %path.display(),
            pages = page_count,
            chars = text.len(),
            "extracted PDF text"
        );
        Ok(text)
    }
}

/// Join the non-empty pages of extracted PDF text with newlines, in page order.
///
/// Each page is trimmed; pages left blank are skipped.
#[must_use]
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for page in pages {
        let page = page.as_ref().trim();
        if page.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(page);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page() {
        let pages = ["\n\nThis is page one content.\nSecond line.\n"];
        assert_eq!(join_pages(pages), "This is page one content.\nSecond line.");
    }

    #[test]
    fn multiple_pages_in_order() {
        let pages = ["Page one content", "Page two content", "Page three content"];
        assert_eq!(
            join_pages(pages),
            "Page one content\nPage two content\nPage three content"
        );
    }

    #[test]
    fn empty_pages_skipped() {
        let pages = vec![
            "Content".to_string(),
            String::new(),
            "   \n".to_string(),
            "More content".to_string(),
        ];
        assert_eq!(join_pages(pages), "Content\nMore content");
    }

    #[test]
    fn no_text_yields_empty_string() {
        assert_eq!(join_pages(["", "\n", " "]), "");
        assert_eq!(join_pages(Vec::<String>::new()), "");
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        let err = PdfExtractor::new().try_extract(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Extraction { .. }));
    }
}
