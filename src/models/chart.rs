use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::PriceHistoryEntry;
use crate::error::PokewealthError;
use crate::format;

// ---------------------------------------------------------------------------
// TimeRange: Window selector for the portfolio chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    OneDay,
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::OneDay,
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::OneYear,
        TimeRange::All,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TimeRange::OneDay => "1d",
            TimeRange::OneMonth => "1m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::OneYear => "1y",
            TimeRange::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneDay => "1 Day",
            TimeRange::OneMonth => "1 Month",
            TimeRange::ThreeMonths => "3 Months",
            TimeRange::OneYear => "1 Year",
            TimeRange::All => "All Time",
        }
    }

    /// Number of days the window spans. "All" is capped at one year.
    pub fn days(self) -> u32 {
        match self {
            TimeRange::OneDay => 1,
            TimeRange::OneMonth => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::OneYear | TimeRange::All => 365,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TimeRange {
    type Err = PokewealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| PokewealthError::InvalidArgument(format!("Unknown time range: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// ChartPoint / ChartSeries: Plot-ready data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub value: f64,
    pub display: String,
}

impl ChartPoint {
    /// Convert a recorded history entry. Timestamps that cannot be parsed
    /// are shown as sent.
    pub fn from_history(entry: &PriceHistoryEntry) -> Self {
        let date = format::parse_timestamp_date(&entry.recorded_at)
            .map(format::short_date)
            .unwrap_or_else(|| entry.recorded_at.clone());
        Self {
            date,
            value: entry.price,
            display: entry.price_display.clone(),
        }
    }
}

/// Where a series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Backend price history for one card.
    Recorded,
    /// Locally fabricated placeholder. Not financial data.
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub provenance: Provenance,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn recorded(history: &[PriceHistoryEntry]) -> Self {
        Self {
            provenance: Provenance::Recorded,
            points: history.iter().map(ChartPoint::from_history).collect(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.provenance == Provenance::Synthetic
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}
