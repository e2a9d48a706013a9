//! Collection gallery: every saved card in a grid.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

use tracing::debug;

use crate::models::{GradeBand, PriceChange, SavedCard, SubScore};
use crate::synthetic::SyntheticPriceChanges;

#[derive(Debug, Clone)]
pub enum Msg {
    CardsLoaded(Result<Vec<SavedCard>, String>),
    ImageFailed(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchCards,
}

/// What to draw in a card's image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    /// Load `GET /cards/{id}/image`.
    Remote,
    /// No stored image, or the remote one failed to load.
    Placeholder,
}

/// Everything needed to draw one card tile.
#[derive(Debug, Clone)]
pub struct CardTile<'a> {
    pub card: &'a SavedCard,
    pub image: ImageState,
    pub overall: Option<GradeBand>,
    pub sub_scores: Vec<SubScore<'a>>,
    /// Cosmetic only; see [`SyntheticPriceChanges`].
    pub synthetic_change: Option<PriceChange>,
}

pub struct CollectionGallery {
    cards: Vec<SavedCard>,
    loading: bool,
    error: Option<String>,
    price_changes: SyntheticPriceChanges,
    images: HashMap<i64, ImageState>,
    rng: StdRng,
}

impl CollectionGallery {
    /// A fresh gallery plus the fetch it needs on mount.
    pub fn mount() -> (Self, Command) {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Like [`mount`](Self::mount) with a caller-supplied generator for the
    /// decorative price changes.
    pub fn with_rng(rng: StdRng) -> (Self, Command) {
        let gallery = Self {
            cards: Vec::new(),
            loading: true,
            error: None,
            price_changes: SyntheticPriceChanges::default(),
            images: HashMap::new(),
            rng,
        };
        (gallery, Command::FetchCards)
    }

    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::CardsLoaded(Ok(cards)) => {
                self.loading = false;
                self.images = cards
                    .iter()
                    .map(|c| {
                        let state = if c.image_filename.is_some() {
                            ImageState::Remote
                        } else {
                            ImageState::Placeholder
                        };
                        (c.id, state)
                    })
                    .collect();
                self.price_changes = if cards.is_empty() {
                    SyntheticPriceChanges::default()
                } else {
                    SyntheticPriceChanges::generate(cards.iter().map(|c| c.id), &mut self.rng)
                };
                self.cards = cards;
            }
            Msg::CardsLoaded(Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
            Msg::ImageFailed(id) => {
                debug!(id, "card image failed to load; showing placeholder");
                if let Some(state) = self.images.get_mut(&id) {
                    *state = ImageState::Placeholder;
                }
            }
        }
        None
    }

    pub fn cards(&self) -> &[SavedCard] {
        &self.cards
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.cards.is_empty()
    }

    pub fn image_state(&self, id: i64) -> ImageState {
        self.images
            .get(&id)
            .copied()
            .unwrap_or(ImageState::Placeholder)
    }

    pub fn price_changes(&self) -> &SyntheticPriceChanges {
        &self.price_changes
    }

    pub fn tiles(&self) -> Vec<CardTile<'_>> {
        self.cards
            .iter()
            .map(|card| CardTile {
                card,
                image: self.image_state(card.id),
                overall: card.overall_band(),
                sub_scores: card.sub_scores(),
                synthetic_change: self.price_changes.get(card.id).copied(),
            })
            .collect()
    }
}
