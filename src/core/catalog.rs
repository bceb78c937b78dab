use crate::core::{CardRecord, CardSource};
use crate::utils::error::{Result, TarotError};
use std::collections::HashSet;

/// The fixed set of 78 card records. Loaded once at startup through a
/// [`CardSource`], read-only thereafter, so it can be shared across
/// concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<CardRecord>,
}

impl CardCatalog {
    /// Fails fast on an empty source or a duplicate card name; the catalog
    /// never changes at runtime, so any load problem is a fatal
    /// configuration error.
    pub fn load<S: CardSource>(source: &S) -> Result<Self> {
        let cards = source.load_cards()?;

        if cards.is_empty() {
            return Err(TarotError::CatalogError {
                message: "card source yielded no documents".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name.as_str()) {
                return Err(TarotError::CatalogError {
                    message: format!("duplicate card name: {}", card.name),
                });
            }
        }

        tracing::info!("Card catalog loaded with {} cards", cards.len());
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_by_number(&self, number: u32) -> Option<&CardRecord> {
        let wanted = number.to_string();
        self.cards.iter().find(|c| c.number == wanted)
    }

    pub fn card_by_name(&self, name: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.name == name)
    }
}
