//! Portfolio aggregate analytics.

use crate::config;
use crate::error::Result;
use crate::models::PortfolioSummary;
use crate::transport::Transport;

/// Access to `GET /portfolio/analytics`.
pub struct PortfolioEndpoint<'a> {
    transport: &'a Transport,
}

impl<'a> PortfolioEndpoint<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch total value, card count and the four change buckets.
    pub fn analytics(&self) -> Result<PortfolioSummary> {
        self.transport.get_json(config::PORTFOLIO_ANALYTICS_PATH)
    }
}
