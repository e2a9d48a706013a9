use serde::{Deserialize, Serialize};

use super::grade::{GradingCondition, GradingDimension};

// ---------------------------------------------------------------------------
// AnalysisResult: What the backend made of an uploaded card photo
// ---------------------------------------------------------------------------

/// Response of `POST /analyze-card`.
///
/// Only the name, price text and details are guaranteed; grading and market
/// data depend on what the backend could determine for this image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub card_name: String,
    pub estimated_price: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub details: String,

    // -- AI grading --
    pub centering: Option<GradingCondition>,
    pub corners: Option<GradingCondition>,
    pub edges: Option<GradingCondition>,
    pub surface: Option<GradingCondition>,
    pub overall_grade: Option<f64>,

    // -- Market data --
    pub market_price: Option<f64>,
    pub price_source: Option<String>,
    pub tcg_player_id: Option<String>,
    pub set_name: Option<String>,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub psa_10_price: Option<f64>,
    pub psa_9_price: Option<f64>,
    pub psa_8_price: Option<f64>,
}

impl AnalysisResult {
    /// The suggested condition for one grading dimension, if any.
    pub fn condition(&self, dimension: GradingDimension) -> Option<&GradingCondition> {
        match dimension {
            GradingDimension::Centering => self.centering.as_ref(),
            GradingDimension::Corners => self.corners.as_ref(),
            GradingDimension::Edges => self.edges.as_ref(),
            GradingDimension::Surface => self.surface.as_ref(),
        }
    }

    /// True when the backend returned at least one grading sub-score.
    pub fn has_grading(&self) -> bool {
        GradingDimension::ALL
            .iter()
            .any(|d| self.condition(*d).is_some())
    }
}
