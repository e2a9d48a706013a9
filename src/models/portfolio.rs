use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceChange: Absolute and relative movement over some window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub value: f64,
    pub percentage: f64,
}

impl PriceChange {
    pub fn is_gain(&self) -> bool {
        self.value >= 0.0
    }
}

// ---------------------------------------------------------------------------
// PortfolioSummary: Aggregate returned by `GET /portfolio/analytics`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cards: i64,
    pub price_changes: PortfolioChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioChanges {
    #[serde(rename = "1_day")]
    pub one_day: PriceChange,
    #[serde(rename = "1_month")]
    pub one_month: PriceChange,
    #[serde(rename = "3_months")]
    pub three_months: PriceChange,
    #[serde(rename = "1_year")]
    pub one_year: PriceChange,
}

impl PortfolioChanges {
    /// The four buckets with their display labels, shortest window first.
    pub fn buckets(&self) -> [(&'static str, PriceChange); 4] {
        [
            ("1 Day", self.one_day),
            ("1 Month", self.one_month),
            ("3 Months", self.three_months),
            ("1 Year", self.one_year),
        ]
    }
}
