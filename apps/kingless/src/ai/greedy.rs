//! Greedy bot - the "expert" difficulty.
//!
//! Deterministic, no RNG:
//! - Leading: play the lowest rank in hand (save high cards).
//! - Following with the lead suit in hand: play the highest card of the
//!   lead suit (maximize the chance of taking the trick while staying
//!   legal).
//! - Following while void: dump the lowest rank overall; the trick is
//!   already lost, so shed the weakest card.
//!
//! Ties across suits at the same rank break on the stable card order, so
//! the choice is a pure function of the hand contents and the lead suit.

use super::trait_def::{CardPolicy, PolicyError};
use crate::domain::{Card, PlayerView, Suit};

#[derive(Debug)]
pub struct GreedyBot;

impl GreedyBot {
    pub const NAME: &'static str = "expert";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn lowest_by_rank(cards: &[Card]) -> Option<Card> {
        cards.iter().copied().min_by_key(|c| (c.rank, c.suit))
    }

    fn highest_in_suit(cards: &[Card], suit: Suit) -> Option<Card> {
        cards
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .max_by_key(|c| c.rank)
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPolicy for GreedyBot {
    fn choose_card(&self, view: &PlayerView<'_>) -> Result<Card, PolicyError> {
        if view.hand.is_empty() {
            return Err(PolicyError::InvalidMove("no cards in hand".into()));
        }

        let choice = match view.lead_suit {
            None => Self::lowest_by_rank(view.hand),
            Some(lead) => Self::highest_in_suit(view.hand, lead)
                .or_else(|| Self::lowest_by_rank(view.hand)),
        };

        choice.ok_or_else(|| PolicyError::Internal("no candidate card".into()))
    }
}
