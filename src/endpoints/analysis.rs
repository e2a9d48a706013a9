//! Card photo analysis.

use reqwest::blocking::multipart::Form;
use tracing::info;

use crate::config;
use crate::error::Result;
use crate::models::{AnalysisResult, CardImage};
use crate::transport::Transport;

/// Multipart field the analyze route reads the photo from.
pub const FILE_FIELD: &str = "file";

/// Access to `POST /analyze-card`.
pub struct AnalysisEndpoint<'a> {
    transport: &'a Transport,
}

impl<'a> AnalysisEndpoint<'a> {
    /// Create a new `AnalysisEndpoint` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Upload a photo and return the backend's identification, price and
    /// grading estimate.
    pub fn analyze_card(&self, image: &CardImage) -> Result<AnalysisResult> {
        let form = Form::new().part(FILE_FIELD, image.to_part()?);
        let result: AnalysisResult = self
            .transport
            .post_multipart_json(config::ANALYZE_CARD_PATH, form)?;
        info!(card = %result.card_name, graded = result.has_grading(), "card analyzed");
        Ok(result)
    }
}
