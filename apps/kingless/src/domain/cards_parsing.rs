//! Card parsing from string representations (e.g., "AS", "2C").

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use super::errors::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(DomainError::ParseCard(s.to_string()));
        }
        let mut chars = s.chars();
        let rank_ch = chars
            .next()
            .ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let suit_ch = chars
            .next()
            .ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Cards.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_parsing() {
        assert_eq!(
            "AS".parse::<Card>().unwrap(),
            Card {
                suit: Suit::Spades,
                rank: Rank::Ace
            }
        );
        assert_eq!(
            "TD".parse::<Card>().unwrap(),
            Card {
                suit: Suit::Diamonds,
                rank: Rank::Ten
            }
        );
        assert_eq!(
            "9C".parse::<Card>().unwrap(),
            Card {
                suit: Suit::Clubs,
                rank: Rank::Nine
            }
        );
        assert_eq!(
            "2H".parse::<Card>().unwrap(),
            Card {
                suit: Suit::Hearts,
                rank: Rank::Two
            }
        );

        assert!("1H".parse::<Card>().is_err()); // invalid rank
        assert!("11S".parse::<Card>().is_err()); // too long
        assert!("Ah".parse::<Card>().is_err()); // lowercase suit
        assert!("ZZ".parse::<Card>().is_err()); // invalid rank and suit
        assert!("".parse::<Card>().is_err()); // empty string
        assert!("10H".parse::<Card>().is_err()); // too long
    }

    #[test]
    fn test_try_parse_cards() {
        let cards = try_parse_cards(["AS", "TD", "9C"]).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards[0],
            Card {
                suit: Suit::Spades,
                rank: Rank::Ace
            }
        );

        assert!(try_parse_cards(["AS", "1H", "9C"]).is_err());
    }
}
