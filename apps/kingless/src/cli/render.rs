//! ASCII card rendering for the terminal.

use crate::domain::{Card, Rank, Suit};

fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    }
}

/// Render cards side by side as boxed faces.
pub fn render_cards(cards: &[Card]) -> String {
    let mut lines = [String::new(), String::new(), String::new(), String::new()];

    for card in cards {
        let label = rank_label(card.rank);
        let symbol = suit_symbol(card.suit);
        lines[0].push_str("┌─────┐  ");
        lines[1].push_str(&format!("|  {label:<2} |  "));
        lines[2].push_str(&format!("|  {symbol}  |  "));
        lines[3].push_str(&format!("|  {label:<2} |  "));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&"└─────┘  ".repeat(cards.len()));
    out
}

/// Render a single card face.
pub fn render_card(card: Card) -> String {
    render_cards(std::slice::from_ref(&card))
}

/// Render a hand with pick indices above the faces.
pub fn render_hand_with_indices(cards: &[Card]) -> String {
    let indices = (0..cards.len())
        .map(|i| format!("   {i:<2}    "))
        .collect::<String>();
    format!("{indices}\n{}", render_cards(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::try_parse_cards;

    #[test]
    fn renders_rank_and_suit_symbol() {
        let face = render_card("AH".parse().unwrap());
        assert!(face.contains('A'));
        assert!(face.contains('♥'));
        assert!(face.contains("┌─────┐"));
        assert!(face.contains("└─────┘"));
    }

    #[test]
    fn renders_ten_with_two_characters() {
        let face = render_card("TS".parse().unwrap());
        assert!(face.contains("10"));
        assert!(face.contains('♠'));
    }

    #[test]
    fn renders_several_cards_side_by_side() {
        let cards = try_parse_cards(["2C", "QD"]).unwrap();
        let faces = render_cards(&cards);
        for line in faces.lines() {
            assert!(!line.is_empty());
        }
        assert!(faces.contains('♣'));
        assert!(faces.contains('♦'));
    }

    #[test]
    fn indices_line_up_with_cards() {
        let cards = try_parse_cards(["2C", "QD", "AH"]).unwrap();
        let rendered = render_hand_with_indices(&cards);
        let first_line = rendered.lines().next().unwrap();
        assert!(first_line.contains('0'));
        assert!(first_line.contains('2'));
    }
}
