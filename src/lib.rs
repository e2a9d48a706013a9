//! PokeWealth SDK for Rust.
//!
//! A headless client for the PokeWealth card service. The backend does the
//! real work (photo analysis, grading, market prices, storage, portfolio
//! aggregation); this crate provides the typed HTTP boundary to it and the
//! state machines of the three views built on top: upload & analyze, the
//! collection gallery, and the portfolio overview.
//!
//! # Quick start
//!
//! ```no_run
//! use pokewealth_sdk::models::CardImage;
//! use pokewealth_sdk::PokewealthClient;
//!
//! let client = PokewealthClient::builder().build().unwrap();
//!
//! // Analyze a photo
//! let image = CardImage::from_path("charizard.jpg").unwrap();
//! let result = client.analysis().analyze_card(&image).unwrap();
//!
//! // Browse the collection
//! let cards = client.cards().list().unwrap();
//! ```

pub mod app;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod models;
pub mod save_request;
pub mod synthetic;
pub mod transport;
pub mod views;

pub use app::App;
#[cfg(feature = "async")]
pub use async_client::AsyncPokewealthClient;
pub use error::{PokewealthError, Result};
pub use save_request::SaveCardRequest;
pub use transport::Transport;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokewealthClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PokewealthClient`].
///
/// Use [`PokewealthClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokewealthClientBuilder::build) to create the client.
pub struct PokewealthClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for PokewealthClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
        }
    }
}

impl PokewealthClientBuilder {
    /// Set the backend origin.
    ///
    /// Defaults to `http://localhost:8000`. A trailing slash is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds. Photo analysis runs a model on the backend,
    /// so very short timeouts will cut it off.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// No request is made here; the first network call happens on the first
    /// endpoint method invoked.
    pub fn build(self) -> Result<PokewealthClient> {
        if self.base_url.trim().is_empty() {
            return Err(PokewealthError::InvalidArgument(
                "base URL must not be empty".to_string(),
            ));
        }
        let transport = Transport::new(&self.base_url, self.timeout, &self.user_agent)?;
        Ok(PokewealthClient { transport })
    }
}

// ---------------------------------------------------------------------------
// PokewealthClient
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Wraps a [`Transport`] and exposes each group of backend routes as a
/// lightweight borrowing wrapper.
///
/// Created via [`PokewealthClient::builder()`].
pub struct PokewealthClient {
    transport: Transport,
}

impl PokewealthClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> PokewealthClientBuilder {
        PokewealthClientBuilder::default()
    }

    /// Access the photo analysis route.
    pub fn analysis(&self) -> endpoints::AnalysisEndpoint<'_> {
        endpoints::AnalysisEndpoint::new(&self.transport)
    }

    /// Access the saved-card routes (save, list, image, price history).
    pub fn cards(&self) -> endpoints::CardEndpoint<'_> {
        endpoints::CardEndpoint::new(&self.transport)
    }

    /// Access the portfolio analytics route.
    pub fn portfolio(&self) -> endpoints::PortfolioEndpoint<'_> {
        endpoints::PortfolioEndpoint::new(&self.transport)
    }

    /// Return a reference to the underlying [`Transport`].
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl fmt::Display for PokewealthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PokewealthClient(base_url={}, timeout={:?})",
            self.transport.base_url,
            self.transport.timeout()
        )
    }
}
