//! Builder for the `POST /save-card` multipart body.
//!
//! Starts from what the backend suggested in an [`AnalysisResult`], applies
//! the user's overrides, and only ever emits fields that hold a value. An
//! absent field is left out of the form entirely, never sent blank.
//!
//! # Example
//!
//! ```rust
//! use pokewealth_sdk::models::{AnalysisResult, CardImage, GradingEdit};
//! use pokewealth_sdk::SaveCardRequest;
//!
//! # fn example(result: &AnalysisResult, image: CardImage, edit: &GradingEdit) {
//! let request = SaveCardRequest::from_analysis(image, result)
//!     .card_name("Charizard (Base Set)")
//!     .grading(edit)
//!     .clone();
//! let fields = request.fields();
//! # }
//! ```

use reqwest::blocking::multipart::Form;

use crate::error::Result;
use crate::models::{AnalysisResult, CardImage, GradingEdit};

/// Multipart field holding the photo.
pub const IMAGE_FIELD: &str = "image_file";

/// Collects the fields of a save request. Methods return `&mut Self` for chaining.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveCardRequest {
    image: CardImage,
    fields: Vec<(String, String)>,
}

impl SaveCardRequest {
    /// Start a request carrying only the image and the three required text fields.
    pub fn new(
        image: CardImage,
        card_name: &str,
        estimated_price: &str,
        details: &str,
    ) -> Self {
        let mut req = Self {
            image,
            fields: Vec::new(),
        };
        req.set("card_name", card_name.to_string());
        req.set("estimated_price", estimated_price.to_string());
        req.set("details", details.to_string());
        req
    }

    /// Seed from a backend analysis: name, price, details, overall grade and
    /// every truthy market field.
    ///
    /// The AI grading sub-scores are not copied here; they reach the form
    /// through [`grading`](Self::grading) so user edits always win.
    pub fn from_analysis(image: CardImage, result: &AnalysisResult) -> Self {
        let mut req = Self::new(
            image,
            &result.card_name,
            &result.estimated_price,
            &result.details,
        );
        req.number("overall_grade", result.overall_grade)
            .number("market_price", result.market_price)
            .text("price_source", result.price_source.as_deref())
            .text("tcg_player_id", result.tcg_player_id.as_deref())
            .text("set_name", result.set_name.as_deref())
            .text("card_number", result.card_number.as_deref())
            .text("rarity", result.rarity.as_deref())
            .number("psa_10_price", result.psa_10_price)
            .number("psa_9_price", result.psa_9_price)
            .number("psa_8_price", result.psa_8_price);
        req
    }

    /// Override the card name.
    pub fn card_name(&mut self, name: &str) -> &mut Self {
        self.set("card_name", name.to_string());
        self
    }

    /// Override the estimated price text.
    pub fn estimated_price(&mut self, price: &str) -> &mut Self {
        self.set("estimated_price", price.to_string());
        self
    }

    /// Override the free-form details.
    pub fn details(&mut self, details: &str) -> &mut Self {
        self.set("details", details.to_string());
        self
    }

    /// Apply the grading editor.
    ///
    /// Inputs left blank are removed from the request, including any value a
    /// previous call put there.
    pub fn grading(&mut self, edit: &GradingEdit) -> &mut Self {
        for dimension in crate::models::GradingDimension::ALL {
            self.remove(dimension.score_field());
            self.remove(dimension.description_field());
        }
        for (field, value) in edit.form_fields() {
            self.set(field, value);
        }
        self
    }

    /// Add an optional text field. `None` and empty text are skipped.
    pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.is_empty() => self.set(name, v.to_string()),
            _ => self.remove(name),
        }
        self
    }

    /// Add an optional numeric field. `None`, zero and NaN are skipped.
    pub fn number(&mut self, name: &str, value: Option<f64>) -> &mut Self {
        match value {
            Some(v) if v != 0.0 && !v.is_nan() => self.set(name, v.to_string()),
            _ => self.remove(name),
        }
        self
    }

    /// Set an arbitrary text field verbatim.
    pub fn field(&mut self, name: &str, value: &str) -> &mut Self {
        self.set(name, value.to_string());
        self
    }

    /// The attached image.
    pub fn image(&self) -> &CardImage {
        &self.image
    }

    /// The value of one text field, if it will be sent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All text fields in the order they were first set.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    /// Build the multipart form: the image as a file part followed by every
    /// text field.
    pub fn to_form(&self) -> Result<Form> {
        let mut form = Form::new().part(IMAGE_FIELD, self.image.to_part()?);
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }

    fn set(&mut self, name: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    fn remove(&mut self, name: &str) {
        self.fields.retain(|(k, _)| k != name);
    }
}
