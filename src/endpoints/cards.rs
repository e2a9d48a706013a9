//! Saved-card routes: create, list, image bytes and price history.

use tracing::info;

use crate::config;
use crate::error::{PokewealthError, Result};
use crate::models::{PriceHistoryEntry, SavedCard};
use crate::save_request::SaveCardRequest;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// CardEndpoint
// ---------------------------------------------------------------------------

/// Access to the `/save-card` and `/cards` routes.
pub struct CardEndpoint<'a> {
    transport: &'a Transport,
}

impl<'a> CardEndpoint<'a> {
    /// Create a new `CardEndpoint` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Persist a card to the collection and return the stored record.
    ///
    /// On rejection the error carries the backend's `detail` message when it
    /// sent one.
    pub fn save(&self, request: &SaveCardRequest) -> Result<SavedCard> {
        let form = request.to_form()?;
        let card: SavedCard = self
            .transport
            .post_multipart_json(config::SAVE_CARD_PATH, form)?;
        info!(id = card.id, card = %card.card_name, "card saved");
        Ok(card)
    }

    /// Every saved card, in the order the backend returns them.
    pub fn list(&self) -> Result<Vec<SavedCard>> {
        self.transport.get_json(config::CARDS_PATH)
    }

    /// Raw image bytes stored for a card.
    ///
    /// Returns [`PokewealthError::NotFound`] when the card or its image is
    /// missing, which callers treat as "show the placeholder".
    pub fn image(&self, id: i64) -> Result<Vec<u8>> {
        match self.transport.get_bytes(&config::card_image_path(id)) {
            Err(PokewealthError::Api { status: 404, detail }) => Err(PokewealthError::NotFound(
                detail.unwrap_or_else(|| format!("image for card {}", id)),
            )),
            other => other,
        }
    }

    /// Absolute image URL for rendering, or `None` when the card has no
    /// stored image and a placeholder should be shown instead.
    ///
    /// The `v` query parameter keeps browsers from reusing a cached image
    /// across different cards.
    pub fn image_url(&self, card: &SavedCard) -> Option<String> {
        card.image_filename.as_ref()?;
        Some(format!(
            "{}?v={}",
            self.transport.url(&config::card_image_path(card.id)),
            card.id
        ))
    }

    /// Recorded price points for one card, oldest first as stored.
    pub fn price_history(&self, id: i64) -> Result<Vec<PriceHistoryEntry>> {
        self.transport.get_json(&config::price_history_path(id))
    }
}
