use crate::core::catalog::CardCatalog;
use crate::core::DrawnCard;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Draws shuffled cards from a borrowed catalog. Every call gets its own
/// RNG instance, so concurrent seeded draws stay independent and
/// reproducible.
#[derive(Debug, Clone, Copy)]
pub struct TarotDeck<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> TarotDeck<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// Draw `count` cards. A supplied seed makes order and orientations
    /// deterministic (same seed, same catalog snapshot, same result).
    /// A count larger than the catalog yields an empty vector, never an
    /// error.
    pub fn draw(&self, count: usize, seed: Option<u64>) -> Vec<DrawnCard> {
        if count > self.catalog.len() {
            tracing::warn!(
                "Requested {} cards but the catalog holds {}; returning none",
                count,
                self.catalog.len()
            );
            return Vec::new();
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let mut deck: Vec<usize> = (0..self.catalog.len()).collect();
        deck.shuffle(&mut rng);

        deck.into_iter()
            .take(count)
            .map(|idx| {
                let card = &self.catalog.cards()[idx];
                DrawnCard {
                    name: card.name.clone(),
                    is_upright: rng.gen_bool(0.5),
                    image_url: Some(card.image_url.clone()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::tests::test_card;
    use crate::domain::model::CardRecord;
    use crate::domain::ports::CardSource;
    use crate::utils::error::Result;

    struct StaticSource(Vec<CardRecord>);

    impl CardSource for StaticSource {
        fn load_cards(&self) -> Result<Vec<CardRecord>> {
            Ok(self.0.clone())
        }
    }

    fn catalog_of(n: u32) -> CardCatalog {
        let cards = (1..=n).map(|i| test_card(&format!("Card {}", i), i)).collect();
        CardCatalog::load(&StaticSource(cards)).unwrap()
    }

    #[test]
    fn test_draw_is_deterministic_for_same_seed() {
        let catalog = catalog_of(20);
        let deck = TarotDeck::new(&catalog);

        let first = deck.draw(5, Some(7));
        let second = deck.draw(5, Some(7));

        assert_eq!(first.len(), 5);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.is_upright, b.is_upright);
        }
    }

    #[test]
    fn test_different_seeds_give_different_orders() {
        let catalog = catalog_of(20);
        let deck = TarotDeck::new(&catalog);

        let first: Vec<String> = deck.draw(10, Some(1)).into_iter().map(|c| c.name).collect();
        let second: Vec<String> = deck.draw(10, Some(2)).into_iter().map(|c| c.name).collect();

        assert_ne!(first, second);
    }

    #[test]
    fn test_oversized_count_returns_empty() {
        let catalog = catalog_of(5);
        let deck = TarotDeck::new(&catalog);
        assert!(deck.draw(6, None).is_empty());
        assert!(deck.draw(6, Some(3)).is_empty());
    }

    #[test]
    fn test_draw_has_no_duplicate_cards() {
        let catalog = catalog_of(20);
        let deck = TarotDeck::new(&catalog);

        let mut names: Vec<String> = deck.draw(20, Some(42)).into_iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn test_drawn_cards_carry_image_references() {
        let catalog = catalog_of(3);
        let deck = TarotDeck::new(&catalog);

        let cards = deck.draw(3, Some(1));
        for card in cards {
            let image = card.image_url.unwrap();
            assert!(image.starts_with("/tarot-cards/images/"));
            assert!(image.ends_with(".jpg"));
        }
    }

    #[test]
    fn test_catalog_is_not_mutated_by_draws() {
        let catalog = catalog_of(10);
        let before: Vec<String> = catalog.cards().iter().map(|c| c.name.clone()).collect();

        let deck = TarotDeck::new(&catalog);
        deck.draw(10, Some(5));
        deck.draw(10, None);

        let after: Vec<String> = catalog.cards().iter().map(|c| c.name.clone()).collect();
        assert_eq!(before, after);
    }
}
