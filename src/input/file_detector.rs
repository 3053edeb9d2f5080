//! Document kind detection
//!
//! The kind is determined once at the input boundary and dispatched with an
//! exhaustive match. Anything that is not a recognized resume format maps to
//! `Unknown`, which extracts to empty text rather than an error.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    WordDoc,
    Unknown,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::WordDoc,
            _ => DocumentKind::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentKind::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(DocumentKind::from_extension("pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_extension("PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_extension("docx"), DocumentKind::WordDoc);
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(DocumentKind::from_extension("txt"), DocumentKind::Unknown);
        assert_eq!(DocumentKind::from_extension("doc"), DocumentKind::Unknown);
        assert_eq!(DocumentKind::from_extension("md"), DocumentKind::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("resume.pdf")),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("cv.docx")),
            DocumentKind::WordDoc
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("no_extension")),
            DocumentKind::Unknown
        );
    }
}
