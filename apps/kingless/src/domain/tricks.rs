//! Trick resolution: lead suit, follow-suit enforcement, winner.

use serde::{Deserialize, Serialize};

use super::cards_logic::card_beats;
use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::state::{opponent, Seat};

/// Result of resolving one trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickResolution {
    /// Lead suit, always the suit of the leader's card.
    pub lead: Suit,
    /// Seat that takes the trick and leads the next one.
    pub winner: Seat,
    /// Follower played off-suit while holding the lead suit.
    pub violation: bool,
}

/// Resolve a trick between `leader` and the opposing seat.
///
/// `follower_had_lead` must be evaluated against the follower's hand
/// *before* the follower's card was removed from it; the violation check
/// is an illegal-move detector, and a post-play snapshot would miss the
/// case where the played card was the follower's only lead-suit card.
pub fn resolve_trick(
    leader: Seat,
    leader_card: Card,
    follower_card: Card,
    follower_had_lead: bool,
) -> TrickResolution {
    let follower = opponent(leader);
    let lead = leader_card.suit;

    // Broke the follow-suit rule: the leader takes the trick outright,
    // rank notwithstanding.
    if follower_card.suit != lead && follower_had_lead {
        return TrickResolution {
            lead,
            winner: leader,
            violation: true,
        };
    }

    // Follower matched the lead: rank decides. Ranks cannot tie within a
    // suit since the deck holds no duplicates.
    let winner = if follower_card.suit == lead {
        if card_beats(follower_card, leader_card, lead) {
            follower
        } else {
            leader
        }
    } else {
        // Follower is void in the lead suit: the lead wins over any
        // off-suit rank.
        leader
    };

    TrickResolution {
        lead,
        winner,
        violation: false,
    }
}

/// One resolved trick, as handed to the game log and the simulator.
/// The engine itself retains nothing from it beyond score and leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrickRecord {
    pub game_no: u32,
    pub hand_no: u32,
    pub round_no: u8,
    /// Seat that led this trick.
    pub leader: Seat,
    /// Cards played, seat-indexed.
    pub cards: [Card; PLAYERS],
    pub lead_suit: Suit,
    pub winner: Seat,
    pub violation: bool,
    /// Card revealed from the deck after the trick resolved.
    pub revealed: Card,
    /// Remaining hands after the trick, seat-indexed.
    pub hands_after: [Vec<Card>; PLAYERS],
    /// Cumulative scores after the trick, seat-indexed.
    pub scores: [u8; PLAYERS],
}
