use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// GradingCondition: One AI-suggested sub-score with its rationale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingCondition {
    pub score: f64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
}

// ---------------------------------------------------------------------------
// GradingDimension: The four independent condition axes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingDimension {
    Centering,
    Corners,
    Edges,
    Surface,
}

impl GradingDimension {
    pub const ALL: [GradingDimension; 4] = [
        GradingDimension::Centering,
        GradingDimension::Corners,
        GradingDimension::Edges,
        GradingDimension::Surface,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradingDimension::Centering => "Centering",
            GradingDimension::Corners => "Corners",
            GradingDimension::Edges => "Edges",
            GradingDimension::Surface => "Surface",
        }
    }

    /// Save-form field carrying the numeric score.
    pub fn score_field(self) -> &'static str {
        match self {
            GradingDimension::Centering => "centering_score",
            GradingDimension::Corners => "corners_score",
            GradingDimension::Edges => "edges_score",
            GradingDimension::Surface => "surface_score",
        }
    }

    /// Save-form field carrying the free-text rationale.
    ///
    /// Centering is stored as a "comment" by the backend; the other three
    /// are "descriptions".
    pub fn description_field(self) -> &'static str {
        match self {
            GradingDimension::Centering => "centering_comment",
            GradingDimension::Corners => "corners_description",
            GradingDimension::Edges => "edges_description",
            GradingDimension::Surface => "surface_description",
        }
    }
}

impl fmt::Display for GradingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// GradeBand: Visual color band derived from a 1-10 score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeBand {
    Strong,
    Fair,
    Weak,
    Poor,
}

impl GradeBand {
    /// Band for a score. Thresholds are inclusive: 9 and up is strong,
    /// 7 fair, 5 weak, anything lower poor.
    pub fn for_score(score: f64) -> Self {
        if score >= 9.0 {
            GradeBand::Strong
        } else if score >= 7.0 {
            GradeBand::Fair
        } else if score >= 5.0 {
            GradeBand::Weak
        } else {
            GradeBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Strong => "strong",
            GradeBand::Fair => "fair",
            GradeBand::Weak => "weak",
            GradeBand::Poor => "poor",
        }
    }
}

// ---------------------------------------------------------------------------
// GradingEdit: User-editable text copy of the four sub-scores
// ---------------------------------------------------------------------------

/// Which half of a sub-score a form input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingPart {
    Score,
    Description,
}

/// Text backing one sub-score's two inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradingEntry {
    pub score: String,
    pub description: String,
}

/// Form state for the grading editor.
///
/// Scores are held as text so the user can type freely; the backend parses
/// them when the card is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradingEdit {
    centering: GradingEntry,
    corners: GradingEntry,
    edges: GradingEntry,
    surface: GradingEntry,
}

impl GradingEdit {
    /// Seed from the AI suggestions, stringifying each score.
    ///
    /// Dimensions the analysis did not grade start out blank.
    pub fn from_analysis(result: &super::AnalysisResult) -> Self {
        let mut edit = Self::default();
        for dimension in GradingDimension::ALL {
            if let Some(condition) = result.condition(dimension) {
                *edit.entry_mut(dimension) = GradingEntry {
                    score: condition.score.to_string(),
                    description: condition.description.clone(),
                };
            }
        }
        edit
    }

    pub fn entry(&self, dimension: GradingDimension) -> &GradingEntry {
        match dimension {
            GradingDimension::Centering => &self.centering,
            GradingDimension::Corners => &self.corners,
            GradingDimension::Edges => &self.edges,
            GradingDimension::Surface => &self.surface,
        }
    }

    fn entry_mut(&mut self, dimension: GradingDimension) -> &mut GradingEntry {
        match dimension {
            GradingDimension::Centering => &mut self.centering,
            GradingDimension::Corners => &mut self.corners,
            GradingDimension::Edges => &mut self.edges,
            GradingDimension::Surface => &mut self.surface,
        }
    }

    /// Replace one input's text.
    pub fn set(&mut self, dimension: GradingDimension, part: GradingPart, value: impl Into<String>) {
        let entry = self.entry_mut(dimension);
        match part {
            GradingPart::Score => entry.score = value.into(),
            GradingPart::Description => entry.description = value.into(),
        }
    }

    /// Save-form `(field, value)` pairs for every input holding non-blank text.
    ///
    /// Values are trimmed; blank inputs produce no pair at all.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        for dimension in GradingDimension::ALL {
            let entry = self.entry(dimension);
            for (field, text) in [
                (dimension.score_field(), &entry.score),
                (dimension.description_field(), &entry.description),
            ] {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push((field, trimmed.to_string()));
                }
            }
        }
        out
    }

    pub fn is_blank(&self) -> bool {
        self.form_fields().is_empty()
    }
}
