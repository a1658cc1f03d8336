//! File drop handling. Files are only identified, never read: the analyzer sends a
//! placeholder naming the file instead of its contents.

use std::io;
use std::path::Path;

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A file offered to the drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    /// MIME type reported by whoever produced the drop, if any.
    pub mime_type: Option<String>,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRejection {
    #[error("No file was dropped")]
    Empty,

    #[error("Only one file can be analyzed at a time ({0} dropped)")]
    TooMany(usize),

    #[error("{0} is not a PDF or DOCX file")]
    UnsupportedType(String),
}

impl DroppedFile {
    /// Describes a file on disk, inferring the MIME type from its extension.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            mime_type: mime_for_name(&name).map(str::to_string),
            name,
            size: metadata.len(),
        })
    }

    /// Accepted when either the MIME type or the extension says PDF or DOCX.
    pub fn is_supported(&self) -> bool {
        let by_mime = self
            .mime_type
            .as_deref()
            .is_some_and(|mime| mime == PDF_MIME || mime == DOCX_MIME);
        by_mime || mime_for_name(&self.name).is_some()
    }
}

pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}

/// Validates a drop: exactly one file, of a supported type.
pub fn accept_drop(mut files: Vec<DroppedFile>) -> Result<DroppedFile, DropRejection> {
    match files.len() {
        0 => Err(DropRejection::Empty),
        1 => {
            let file = files.remove(0);
            if file.is_supported() {
                Ok(file)
            } else {
                Err(DropRejection::UnsupportedType(file.name))
            }
        }
        n => Err(DropRejection::TooMany(n)),
    }
}

/// Text that stands in for the contents of a dropped file.
pub fn placeholder_text(file_name: &str) -> String {
    format!("[Extracted text from {file_name} would appear here]")
}
