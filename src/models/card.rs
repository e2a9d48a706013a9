use serde::{Deserialize, Serialize};

use super::grade::{GradeBand, GradingDimension};

// ---------------------------------------------------------------------------
// SavedCard: A card persisted in the collection (server-owned, read-only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCard {
    pub id: i64,
    pub card_name: String,
    pub estimated_price: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub details: String,
    pub image_filename: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub created_at: String,

    // -- Grading columns --
    pub centering_score: Option<f64>,
    pub centering_comment: Option<String>,
    pub corners_score: Option<f64>,
    pub corners_description: Option<String>,
    pub edges_score: Option<f64>,
    pub edges_description: Option<String>,
    pub surface_score: Option<f64>,
    pub surface_description: Option<String>,
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

    // -- Authenticity --
    pub is_authentic: Option<bool>,
    pub authenticity_confidence: Option<f64>,
    pub authenticity_notes: Option<String>,
}

/// One graded dimension of a saved card, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore<'a> {
    pub dimension: GradingDimension,
    pub score: f64,
    pub description: Option<&'a str>,
    pub band: GradeBand,
}

impl SavedCard {
    /// The stored score and text for one dimension.
    pub fn grading(&self, dimension: GradingDimension) -> (Option<f64>, Option<&str>) {
        match dimension {
            GradingDimension::Centering => {
                (self.centering_score, self.centering_comment.as_deref())
            }
            GradingDimension::Corners => (self.corners_score, self.corners_description.as_deref()),
            GradingDimension::Edges => (self.edges_score, self.edges_description.as_deref()),
            GradingDimension::Surface => (self.surface_score, self.surface_description.as_deref()),
        }
    }

    /// Sub-scores that were actually recorded, in display order.
    ///
    /// A dimension without a score is skipped even if it carries text.
    pub fn sub_scores(&self) -> Vec<SubScore<'_>> {
        GradingDimension::ALL
            .iter()
            .filter_map(|&dimension| {
                let (score, description) = self.grading(dimension);
                score.map(|score| SubScore {
                    dimension,
                    score,
                    description,
                    band: GradeBand::for_score(score),
                })
            })
            .collect()
    }

    /// Band for the overall grade, when one was recorded.
    pub fn overall_band(&self) -> Option<GradeBand> {
        self.overall_grade.map(GradeBand::for_score)
    }

    /// PSA 10/9/8 reference prices that are present, highest tier first.
    pub fn psa_prices(&self) -> Vec<(u8, f64)> {
        [
            (10, self.psa_10_price),
            (9, self.psa_9_price),
            (8, self.psa_8_price),
        ]
        .into_iter()
        .filter_map(|(tier, price)| price.map(|p| (tier, p)))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// PriceHistoryEntry: One recorded price point for a saved card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub recorded_at: String,
    pub price: f64,
    pub price_display: String,
}
