//! Portfolio overview: aggregate summary plus a value-over-time chart.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tracing::debug;

use crate::models::{ChartSeries, PortfolioSummary, PriceHistoryEntry, TimeRange};
use crate::synthetic;

#[derive(Debug, Clone)]
pub enum Msg {
    SummaryLoaded(Result<PortfolioSummary, String>),
    RangeSelected(TimeRange),
    SourceSelected(ChartSource),
    HistoryLoaded {
        card_id: i64,
        outcome: Result<Vec<PriceHistoryEntry>, String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchSummary,
    FetchHistory { card_id: i64 },
}

/// What the chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartSource {
    /// Recorded history of one saved card.
    Card(i64),
    /// Whole portfolio. The backend has no history route for this, so the
    /// series is fabricated locally.
    #[default]
    Portfolio,
}

// ---------------------------------------------------------------------------
// PriceChart
// ---------------------------------------------------------------------------

pub struct PriceChart {
    source: ChartSource,
    range: TimeRange,
    series: Option<ChartSeries>,
    loading: bool,
    error: Option<String>,
    today: Option<NaiveDate>,
    rng: StdRng,
}

impl PriceChart {
    pub fn new(source: ChartSource, range: TimeRange) -> Self {
        Self::with_rng(source, range, StdRng::from_entropy())
    }

    pub fn with_rng(source: ChartSource, range: TimeRange, rng: StdRng) -> Self {
        Self {
            source,
            range,
            series: None,
            loading: false,
            error: None,
            today: None,
            rng,
        }
    }

    /// Pin the end date of fabricated series instead of using the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// (Re)load the chart for its current source and range.
    ///
    /// A card source asks the caller to fetch its price history; the
    /// portfolio source is filled in immediately and never needs the network.
    pub fn refresh(&mut self) -> Option<Command> {
        self.error = None;
        match self.source {
            ChartSource::Card(card_id) => {
                self.loading = true;
                Some(Command::FetchHistory { card_id })
            }
            ChartSource::Portfolio => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                self.series = Some(synthetic::portfolio_series(self.range, today, &mut self.rng));
                self.loading = false;
                None
            }
        }
    }

    pub fn set_range(&mut self, range: TimeRange) -> Option<Command> {
        self.range = range;
        self.refresh()
    }

    pub fn set_source(&mut self, source: ChartSource) -> Option<Command> {
        self.source = source;
        self.series = None;
        self.refresh()
    }

    /// Apply a history response. Responses for a card the chart no longer
    /// shows are dropped.
    pub fn history_loaded(&mut self, card_id: i64, outcome: Result<Vec<PriceHistoryEntry>, String>) {
        if self.source != ChartSource::Card(card_id) {
            debug!(card_id, source = ?self.source, "dropping stale price history");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(history) => self.series = Some(ChartSeries::recorded(&history)),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn source(&self) -> ChartSource {
        self.source
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn series(&self) -> Option<&ChartSeries> {
        self.series.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ---------------------------------------------------------------------------
// PortfolioOverview
// ---------------------------------------------------------------------------

pub struct PortfolioOverview {
    summary: Option<PortfolioSummary>,
    loading: bool,
    error: Option<String>,
    chart: PriceChart,
}

impl PortfolioOverview {
    /// A fresh overview plus the commands it needs on mount.
    ///
    /// The chart starts on the synthetic portfolio series for one month.
    pub fn mount() -> (Self, Vec<Command>) {
        Self::with_chart(PriceChart::new(ChartSource::Portfolio, TimeRange::default()))
    }

    pub fn with_chart(mut chart: PriceChart) -> (Self, Vec<Command>) {
        let mut commands = vec![Command::FetchSummary];
        commands.extend(chart.refresh());
        let overview = Self {
            summary: None,
            loading: true,
            error: None,
            chart,
        };
        (overview, commands)
    }

    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::SummaryLoaded(Ok(summary)) => {
                self.loading = false;
                self.summary = Some(summary);
                None
            }
            Msg::SummaryLoaded(Err(message)) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
            Msg::RangeSelected(range) => self.chart.set_range(range),
            Msg::SourceSelected(source) => self.chart.set_source(source),
            Msg::HistoryLoaded { card_id, outcome } => {
                self.chart.history_loaded(card_id, outcome);
                None
            }
        }
    }

    pub fn summary(&self) -> Option<&PortfolioSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_range(&self) -> TimeRange {
        self.chart.range()
    }

    pub fn chart(&self) -> &PriceChart {
        &self.chart
    }
}
