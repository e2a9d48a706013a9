//! Random-walk portfolio series and decorative per-card price changes.
//!
//! Generators take any [`Rng`] so callers decide between `thread_rng()` and a
//! seeded generator.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::collections::HashMap;

use crate::format;
use crate::models::{ChartPoint, ChartSeries, PriceChange, Provenance, TimeRange};

/// Starting value of every fabricated portfolio walk.
pub const SEED_VALUE: f64 = 1000.0;

/// Peak-to-peak daily swing of the walk (plus or minus 5%).
pub const DAILY_SWING: f64 = 0.1;

/// Range of the fabricated absolute card change, centered on zero.
pub const CARD_CHANGE_SPAN: f64 = 50.0;

/// Range of the fabricated percentage card change, centered on zero.
pub const CARD_PERCENT_SPAN: f64 = 20.0;

/// Fabricate a daily portfolio series ending on `today`.
///
/// Produces `range.days() + 1` points, oldest first, both endpoints
/// included. Each day multiplies the running value by `1 + (u - 0.5) * 0.1`
/// for a uniform `u`; the plotted value is that running value rounded.
pub fn portfolio_series<R: Rng + ?Sized>(
    range: TimeRange,
    today: NaiveDate,
    rng: &mut R,
) -> ChartSeries {
    let days = range.days() as i64;
    let mut running = SEED_VALUE;
    let mut points = Vec::with_capacity(days as usize + 1);

    for offset in (0..=days).rev() {
        let date = today - Duration::days(offset);
        let variation = (rng.gen::<f64>() - 0.5) * DAILY_SWING;
        running *= 1.0 + variation;
        let value = running.round();
        points.push(ChartPoint {
            date: format::short_date(date),
            value,
            display: format::format_usd(value),
        });
    }

    ChartSeries {
        provenance: Provenance::Synthetic,
        points,
    }
}

/// Fabricate one decorative change: value in [-25, 25), percentage in [-10, 10).
pub fn price_change<R: Rng + ?Sized>(rng: &mut R) -> PriceChange {
    PriceChange {
        value: (rng.gen::<f64>() - 0.5) * CARD_CHANGE_SPAN,
        percentage: (rng.gen::<f64>() - 0.5) * CARD_PERCENT_SPAN,
    }
}

// ---------------------------------------------------------------------------
// SyntheticPriceChanges
// ---------------------------------------------------------------------------

/// Per-card price changes shown as a cosmetic overlay in the gallery.
///
/// Regenerated on every collection load and unrelated to any recorded
/// history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntheticPriceChanges {
    changes: HashMap<i64, PriceChange>,
}

impl SyntheticPriceChanges {
    /// One fabricated change per card id.
    pub fn generate<R: Rng + ?Sized>(ids: impl IntoIterator<Item = i64>, rng: &mut R) -> Self {
        let changes = ids.into_iter().map(|id| (id, price_change(rng))).collect();
        Self { changes }
    }

    pub fn get(&self, id: i64) -> Option<&PriceChange> {
        self.changes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
