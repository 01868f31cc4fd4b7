//! The game state visible to a single seat's decision policy.

use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::state::Seat;

/// Everything a decision policy may see when choosing a card. Notably
/// absent: the opposing hand and the deck.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// The acting seat.
    pub seat: Seat,
    /// The acting seat's own hand.
    pub hand: &'a [Card],
    /// Lead suit of the trick in flight; None when this seat is leading.
    pub lead_suit: Option<Suit>,
    /// 1-based round within the current hand.
    pub round_no: u8,
    /// Cumulative scores, seat-indexed (public information).
    pub scores: [u8; PLAYERS],
}
