//! Property-based tests for trick resolution and the deck.

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{resolve_trick, Deck, Rank, Seat};

proptest! {
    /// The winner of any trick is one of the two seats.
    #[test]
    fn prop_winner_is_a_seat(
        leader in 0u8..=1u8,
        (leader_card, follower_card) in test_gens::two_distinct_cards(),
        had_lead in any::<bool>(),
    ) {
        let res = resolve_trick(leader, leader_card, follower_card, had_lead);
        prop_assert!(res.winner <= 1);
        prop_assert_eq!(res.lead, leader_card.suit);
    }

    /// A follower that plays off-suit while holding the lead suit always
    /// loses to the leader, regardless of ranks.
    #[test]
    fn prop_violation_awards_leader(
        leader in 0u8..=1u8,
        leader_card in test_gens::card(),
        follower_rank in test_gens::rank(),
    ) {
        let follower_card = offsuit_card(leader_card.suit, follower_rank);
        let res = resolve_trick(leader, leader_card, follower_card, true);
        prop_assert_eq!(res.winner, leader);
        prop_assert!(res.violation);
    }

    /// When both cards follow the lead suit, the strictly higher rank wins.
    #[test]
    fn prop_on_suit_higher_rank_wins(
        leader in 0u8..=1u8,
        (suit, a, b) in test_gens::two_distinct_cards_of_suit(),
        swap in any::<bool>(),
    ) {
        let (leader_card, follower_card) = if swap { (b, a) } else { (a, b) };
        let res = resolve_trick(leader, leader_card, follower_card, true);
        prop_assert_eq!(res.lead, suit);
        prop_assert!(!res.violation);
        let expected: Seat = if follower_card.rank > leader_card.rank {
            1 - leader
        } else {
            leader
        };
        prop_assert_eq!(res.winner, expected);
    }

    /// A follower void in the lead suit loses to the leader even with a
    /// higher rank.
    #[test]
    fn prop_void_follower_loses(
        leader in 0u8..=1u8,
        leader_card in test_gens::card(),
        follower_rank in test_gens::rank(),
    ) {
        let follower_card = offsuit_card(leader_card.suit, follower_rank);
        let res = resolve_trick(leader, leader_card, follower_card, false);
        prop_assert_eq!(res.winner, leader);
        prop_assert!(!res.violation);
    }

    /// Every shuffled deck holds exactly the 48 kingless cards.
    #[test]
    fn prop_deck_is_48_unique_kingless_cards(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(Some(seed));
        let mut seen = std::collections::HashSet::new();
        prop_assert_eq!(deck.len(), 48);
        while let Ok(card) = deck.draw() {
            prop_assert!(card.rank != Rank::King);
            prop_assert!(seen.insert(card), "duplicate card in deck");
        }
        prop_assert_eq!(seen.len(), 48);
    }
}

/// A card guaranteed off the given suit (suits rotated by one).
fn offsuit_card(lead: crate::domain::Suit, rank: Rank) -> crate::domain::Card {
    use crate::domain::Suit;
    let suit = match lead {
        Suit::Clubs => Suit::Diamonds,
        Suit::Diamonds => Suit::Hearts,
        Suit::Hearts => Suit::Spades,
        Suit::Spades => Suit::Clubs,
    };
    crate::domain::Card { suit, rank }
}
