// Proptest generators for domain types.
// These generators only produce cards that can occur in a kingless deck.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Suit};

const DEALABLE_RANKS: [Rank; 12] = [
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

const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random dealable Rank (kings never enter a deck)
pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(DEALABLE_RANKS.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by creating a shuffled subset of all possible cards
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::new();
        for &suit in &SUITS {
            for &rank in &DEALABLE_RANKS {
                all_cards.push(Card { suit, rank });
            }
        }
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate two distinct cards
pub fn two_distinct_cards() -> impl Strategy<Value = (Card, Card)> {
    unique_cards(2).prop_map(|cards| (cards[0], cards[1]))
}

/// Generate two distinct cards sharing one suit
pub fn two_distinct_cards_of_suit() -> impl Strategy<Value = (Suit, Card, Card)> {
    (suit(), proptest::sample::subsequence(DEALABLE_RANKS.to_vec(), 2)).prop_map(|(suit, ranks)| {
        (
            suit,
            Card {
                suit,
                rank: ranks[0],
            },
            Card {
                suit,
                rank: ranks[1],
            },
        )
    })
}
