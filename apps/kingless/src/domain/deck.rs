//! Deck construction, shuffling, and draw primitives.

use rand::prelude::*;

use super::cards_types::{Card, Rank, Suit};
use super::errors::DomainError;
use super::rules::DECK_SIZE;

/// The 48 legal cards in standard order: every suit, every rank except King.
fn full_deck() -> Vec<Card> {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
    let ranks = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::Ace,
    ];

    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in suits {
        for rank in ranks {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// An ordered, consumable deck. Cards leave via [`Deck::draw`] and never
/// return; the top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full kingless deck in uniformly random order (Fisher-Yates).
    /// `seed` pins the shuffle for reproducible games; `None` uses OS entropy.
    pub fn shuffled(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// A deck with an exact card order, top of deck last. Used to stack
    /// decks for scenarios and tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    /// Draw `n` cards in deck order. Callers gate re-deals on
    /// [`Deck::len`]; an underfull deck is reported, not recovered.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if self.cards.len() < n {
            return Err(DomainError::InsufficientCards {
                needed: n,
                available: self.cards.len(),
            });
        }
        let mut dealt = Vec::with_capacity(n);
        for _ in 0..n {
            dealt.push(self.draw()?);
        }
        Ok(dealt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_48_unique_cards_and_no_kings() {
        let deck = Deck::shuffled(Some(7));
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert!(deck.cards.iter().all(|c| c.rank != Rank::King));
    }

    #[test]
    fn deck_has_12_ranks_per_suit() {
        let deck = Deck::shuffled(Some(11));
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            assert_eq!(deck.cards.iter().filter(|c| c.suit == suit).count(), 12);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let a = Deck::shuffled(Some(12345));
        let b = Deck::shuffled(Some(12345));
        let c = Deck::shuffled(Some(54321));
        assert_eq!(a.cards, b.cards);
        assert_ne!(a.cards, c.cards);
    }

    #[test]
    fn draw_consumes_top_card() {
        let mut deck = Deck::shuffled(Some(3));
        let expected = *deck.cards.last().unwrap();
        let drawn = deck.draw().unwrap();
        assert_eq!(drawn, expected);
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.cards.contains(&drawn));
    }

    #[test]
    fn draw_on_empty_deck_fails() {
        let mut deck = Deck::from_cards(vec![]);
        assert_eq!(deck.draw(), Err(DomainError::EmptyDeck));
    }

    #[test]
    fn deal_preserves_deck_order() {
        let mut deck = Deck::shuffled(Some(9));
        let expected: Vec<Card> = deck.cards.iter().rev().take(8).copied().collect();
        let dealt = deck.deal(8).unwrap();
        assert_eq!(dealt, expected);
        assert_eq!(deck.len(), DECK_SIZE - 8);
    }

    #[test]
    fn deal_rejects_underfull_deck() {
        let mut deck = Deck::from_cards(
            ["AS", "QH", "2C"]
                .iter()
                .map(|t| t.parse().unwrap())
                .collect(),
        );
        assert_eq!(
            deck.deal(8),
            Err(DomainError::InsufficientCards {
                needed: 8,
                available: 3
            })
        );
        // The failed deal must not have consumed anything.
        assert_eq!(deck.len(), 3);
    }
}
