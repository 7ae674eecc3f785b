use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered source of distinct cards drawn without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Full 52-card deck permuted by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Stacked deck: cards are drawn in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        Ok(Self { cards, position: 0 })
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Removes and returns the next `n` cards. Fails without drawing anything
    /// when fewer than `n` remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::ExhaustedDeck {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn stacked_deck_draws_in_order() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let b = Card::new(Rank::King, Suit::Hearts);
        let mut deck = Deck::from_cards(vec![a, b]).unwrap();
        assert_eq!(deck.deal_card(), Some(a));
        assert_eq!(deck.draw(1).unwrap(), vec![b]);
        assert_eq!(deck.deal_card(), None);
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(
            Deck::from_cards(vec![a, a]).unwrap_err(),
            GameError::DuplicateCard(a)
        );
    }

    #[test]
    fn failed_draw_leaves_deck_untouched() {
        let mut deck = Deck::new_with_seed(3);
        assert!(deck.draw(53).is_err());
        assert_eq!(deck.remaining(), 52);
    }
}
