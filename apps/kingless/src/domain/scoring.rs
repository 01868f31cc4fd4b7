//! Termination conditions and final-score evaluation.

use super::rules::{GUARANTEED_WIN_SCORE, PLAYERS, SHOOT_THE_MOON_SCORE};
use super::state::Seat;

/// How a game ended. `winner: None` means a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// 16 tricks against a scoreless opponent.
    ShootTheMoon { winner: Seat },
    /// 9+ tricks while the opponent has at least one; the trailing side
    /// cannot catch up. Stated rule of the game.
    GuaranteedWin { winner: Seat },
    /// The deck could not supply a fresh deal after a completed hand.
    DeckExhausted { winner: Option<Seat> },
    /// Short-game mode: one hand only.
    ShortGame { winner: Option<Seat> },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Seat> {
        match *self {
            GameOutcome::ShootTheMoon { winner } | GameOutcome::GuaranteedWin { winner } => {
                Some(winner)
            }
            GameOutcome::DeckExhausted { winner } | GameOutcome::ShortGame { winner } => winner,
        }
    }

    /// Stable label for log records and statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            GameOutcome::ShootTheMoon { .. } => "shoot_the_moon",
            GameOutcome::GuaranteedWin { .. } => "guaranteed_win",
            GameOutcome::DeckExhausted { .. } => "deck_exhausted",
            GameOutcome::ShortGame { .. } => "short_game",
        }
    }
}

/// Early termination check, run after every resolved trick.
/// Shoot-the-moon takes priority over the guaranteed win.
pub fn check_early_end(scores: &[u8; PLAYERS]) -> Option<GameOutcome> {
    for seat in 0..PLAYERS {
        let me = scores[seat];
        let them = scores[1 - seat];
        if me == SHOOT_THE_MOON_SCORE && them == 0 {
            return Some(GameOutcome::ShootTheMoon {
                winner: seat as Seat,
            });
        }
    }
    for seat in 0..PLAYERS {
        let me = scores[seat];
        let them = scores[1 - seat];
        if me >= GUARANTEED_WIN_SCORE && them >= 1 {
            return Some(GameOutcome::GuaranteedWin {
                winner: seat as Seat,
            });
        }
    }
    None
}

/// Seat with the strictly higher score; None on equal scores.
pub fn higher_score_winner(scores: &[u8; PLAYERS]) -> Option<Seat> {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    }
}
