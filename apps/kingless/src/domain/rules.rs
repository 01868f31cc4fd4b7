//! Ruleset constants for the kingless deck game.

pub const PLAYERS: usize = 2;

/// Cards dealt to each side per hand.
pub const HAND_SIZE: usize = 8;
pub const ROUNDS_PER_HAND: u8 = 8;

/// 4 suits x 12 ranks; kings are removed at deck construction.
pub const DECK_SIZE: usize = 48;

/// Minimum deck size to re-deal two fresh hands.
pub const REDEAL_MIN_CARDS: usize = PLAYERS * HAND_SIZE;

/// Score that, with the opponent still at zero, shoots the moon.
pub const SHOOT_THE_MOON_SCORE: u8 = 16;

/// Score at which the lead is guaranteed, provided the opponent has scored
/// at least once. Stated rule of the game; not re-derived here.
pub const GUARANTEED_WIN_SCORE: u8 = 9;
