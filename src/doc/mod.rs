//! Document text extraction.
//!
//! One capability: file bytes plus a declared kind in, plain text out.
//! Callers go through the `TextExtractor` trait and never see the parsing
//! libraries. Images carry no extractable text locally; they are reported
//! as `Unsupported` here and the caller routes them to the vision OCR path
//! in `task` instead.

mod office;

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Supported document kinds, derived from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Pptx,
    Image,
}

impl FileKind {
    /// Resolve a kind from a file extension, case-insensitively.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "pptx" => Some(FileKind::Pptx),
            "jpg" | "jpeg" | "png" => Some(FileKind::Image),
            _ => None,
        }
    }

    /// Resolve a kind from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ExtractError::UnknownExtension(path.display().to_string()))
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "PDF"),
            FileKind::Docx => write!(f, "Word document"),
            FileKind::Pptx => write!(f, "PowerPoint presentation"),
            FileKind::Image => write!(f, "image"),
        }
    }
}

/// Why extraction failed.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no text extractor for {0}")]
    Unsupported(FileKind),
    #[error("unrecognized file extension: {0}")]
    UnknownExtension(String),
    #[error("document container is malformed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("document XML is malformed: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("PDF text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("could not read document part: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("document contains no extractable text")]
    Empty,
}

/// File bytes plus a declared kind, to plain text or failure.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8], kind: FileKind) -> Result<String, ExtractError>;
}

/// The local extractor: PDF, Word, and PowerPoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, bytes: &[u8], kind: FileKind) -> Result<String, ExtractError> {
        info!(%kind, len = bytes.len(), "extracting text");
        let text = match kind {
            FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)?,
            FileKind::Docx => office::docx_text(bytes)?,
            FileKind::Pptx => office::pptx_text(bytes)?,
            FileKind::Image => return Err(ExtractError::Unsupported(kind)),
        };
        if text.trim().is_empty() {
            return Err(ExtractError::Empty);
        }
        Ok(text)
    }
}

/// The MIME type of an image file, by sniffing its magic bytes.
///
/// Only the formats the app accepts (PNG, JPEG) are recognized.
pub fn image_mime(bytes: &[u8]) -> Result<&'static str, ExtractError> {
    match image::guess_format(bytes)? {
        image::ImageFormat::Png => Ok("image/png"),
        image::ImageFormat::Jpeg => Ok("image/jpeg"),
        _ => Err(ExtractError::Unsupported(FileKind::Image)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(FileKind::from_extension("pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_extension("PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_extension("docx"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_extension("pptx"), Some(FileKind::Pptx));
        assert_eq!(FileKind::from_extension("jpg"), Some(FileKind::Image));
        assert_eq!(FileKind::from_extension("JPEG"), Some(FileKind::Image));
        assert_eq!(FileKind::from_extension("png"), Some(FileKind::Image));
        assert_eq!(FileKind::from_extension("txt"), None);
        assert_eq!(FileKind::from_extension(""), None);
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(
            FileKind::from_path(Path::new("notes/slides.PPTX")).unwrap(),
            FileKind::Pptx
        );
        assert!(matches!(
            FileKind::from_path(Path::new("archive.tar.gz")),
            Err(ExtractError::UnknownExtension(_))
        ));
        assert!(matches!(
            FileKind::from_path(Path::new("no_extension")),
            Err(ExtractError::UnknownExtension(_))
        ));
    }

    #[test]
    fn test_image_kind_is_unsupported_locally() {
        let result = DocumentExtractor.extract(&[0u8; 4], FileKind::Image);
        assert!(matches!(result, Err(ExtractError::Unsupported(FileKind::Image))));
    }

    #[test]
    fn test_image_mime_sniffing() {
        let png_magic = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert_eq!(image_mime(&png_magic).unwrap(), "image/png");

        let jpeg_magic = [0xffu8, 0xd8, 0xff, 0xe0];
        assert_eq!(image_mime(&jpeg_magic).unwrap(), "image/jpeg");
    }
}
