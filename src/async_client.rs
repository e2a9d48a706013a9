//! Async wrapper around [`PokewealthClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every backend call on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use pokewealth_sdk::AsyncPokewealthClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncPokewealthClient::builder().build().await.unwrap();
//!
//!     // Run any sync client method via closure
//!     let cards = client.run(|c| c.cards().list()).await.unwrap();
//!
//!     // Convenience method for the portfolio summary
//!     let summary = client.portfolio_analytics().await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{PokewealthError, Result};
use crate::models::{AnalysisResult, CardImage, PortfolioSummary, PriceHistoryEntry, SavedCard};
use crate::save_request::SaveCardRequest;
use crate::{config, PokewealthClient};

// ---------------------------------------------------------------------------
// AsyncPokewealthClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPokewealthClient`].
pub struct AsyncPokewealthClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for AsyncPokewealthClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl AsyncPokewealthClientBuilder {
    /// Set the backend origin.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it may not be created from inside an async context.
    pub async fn build(self) -> Result<AsyncPokewealthClient> {
        tokio::task::spawn_blocking(move || {
            let client = PokewealthClient::builder()
                .base_url(self.base_url)
                .timeout(self.timeout)
                .user_agent(self.user_agent)
                .build()?;
            Ok(AsyncPokewealthClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| PokewealthError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPokewealthClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`PokewealthClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client is shared behind an [`Arc`];
/// requests are independent and may run concurrently.
pub struct AsyncPokewealthClient {
    inner: Arc<PokewealthClient>,
}

impl AsyncPokewealthClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncPokewealthClientBuilder {
        AsyncPokewealthClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use pokewealth_sdk::AsyncPokewealthClient;
    /// # async fn example() -> pokewealth_sdk::Result<()> {
    /// # let client = AsyncPokewealthClient::builder().build().await?;
    /// let history = client.run(|c| c.cards().price_history(7)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PokewealthClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| PokewealthError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Upload a photo for analysis.
    pub async fn analyze_card(&self, image: CardImage) -> Result<AnalysisResult> {
        self.run(move |c| c.analysis().analyze_card(&image)).await
    }

    /// Save a card to the collection.
    pub async fn save_card(&self, request: SaveCardRequest) -> Result<SavedCard> {
        self.run(move |c| c.cards().save(&request)).await
    }

    /// List every saved card.
    pub async fn list_cards(&self) -> Result<Vec<SavedCard>> {
        self.run(|c| c.cards().list()).await
    }

    /// Recorded price history for one card.
    pub async fn price_history(&self, id: i64) -> Result<Vec<PriceHistoryEntry>> {
        self.run(move |c| c.cards().price_history(id)).await
    }

    /// The aggregate portfolio summary.
    pub async fn portfolio_analytics(&self) -> Result<PortfolioSummary> {
        self.run(|c| c.portfolio().analytics()).await
    }

    /// Release the client.
    ///
    /// The blocking HTTP client must not be dropped on an async worker, so
    /// the final reference is released on the blocking pool.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| PokewealthError::InvalidArgument(format!("Task join error: {e}")))
    }
}
