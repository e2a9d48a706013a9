use base64::Engine;
use reqwest::blocking::multipart::Part;
use std::fs;
use std::path::Path;

use crate::error::Result;

// ---------------------------------------------------------------------------
// CardImage: A picked photo, held in memory until analyze/save
// ---------------------------------------------------------------------------

/// The image file the user selected.
///
/// No size or format checks happen here; the backend decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CardImage {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, guessing its MIME type from the extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("card")
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Inline `data:` URL used as the local preview before any upload.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// The image as a multipart file part.
    pub fn to_part(&self) -> Result<Part> {
        Ok(Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type)?)
    }
}
