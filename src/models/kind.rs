use std::path::Path;

use serde::Serialize;

/// The kind of input file, resolved from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Pdf,
    Html,
    Image,
}

impl InputKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [InputKind; 4] = [Self::Text, Self::Pdf, Self::Html, Self::Image];

    /// Map a lower-cased extension (without the dot) to its kind.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "html" | "htm" => Some(Self::Html),
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            _ => None,
        }
    }

    /// Resolve the kind of a path by its extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&extension_of(path))
    }

    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Text => &["txt"],
            Self::Pdf => &["pdf"],
            Self::Html => &["html", "htm"],
            Self::Image => &["png", "jpg", "jpeg"],
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cased extension of `path` without the leading dot ("" when absent).
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_extensions() {
        assert_eq!(InputKind::from_extension("txt"), Some(InputKind::Text));
        assert_eq!(InputKind::from_extension("pdf"), Some(InputKind::Pdf));
        assert_eq!(InputKind::from_extension("htm"), Some(InputKind::Html));
        assert_eq!(InputKind::from_extension("jpeg"), Some(InputKind::Image));
        assert_eq!(InputKind::from_extension("docx"), None);
        assert_eq!(InputKind::from_extension(""), None);
    }

    #[test]
    fn from_path_ignores_case() {
        assert_eq!(
            InputKind::from_path(Path::new("/tmp/Scan.PNG")),
            Some(InputKind::Image)
        );
        assert_eq!(
            InputKind::from_path(Path::new("notes.Txt")),
            Some(InputKind::Text)
        );
        assert_eq!(InputKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn extension_of_handles_missing_extension() {
        assert_eq!(extension_of(Path::new("archive.TAR")), "tar");
        assert_eq!(extension_of(Path::new("Makefile")), "");
    }

    #[test]
    fn every_extension_round_trips() {
        for kind in InputKind::ALL {
            for ext in kind.extensions() {
                assert_eq!(InputKind::from_extension(ext), Some(kind));
            }
        }
    }
}
