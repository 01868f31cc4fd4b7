use super::cards_types::Suit;
use super::hand::Hand;
use super::rules::PLAYERS;
use super::scoring::GameOutcome;

pub type Seat = u8; // 0..=1

/// The seat that is not `seat`. With two fixed seats this is its own
/// inverse: the trick loser follows, the winner leads.
#[inline]
pub fn opponent(seat: Seat) -> Seat {
    1 - seat
}

/// Game progression phases. Dealing happens eagerly inside the engine
/// (at construction and on re-deal), so only these states are observable
/// between tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing tricks within a hand; `round_no` is 1-based (1..=8).
    Playing { round_no: u8 },
    /// All 8 rounds of the current hand played; a re-deal decision is due.
    HandComplete,
    /// A termination condition fired; the game is over.
    Terminated(GameOutcome),
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Game number, carried into log records.
    pub game_no: u32,
    /// 1-based count of 8-card deals so far.
    pub hand_no: u32,
    /// Seat leading the current trick.
    pub leader: Seat,
    /// Lead suit of the trick in flight; None between tricks and before
    /// the leader has played.
    pub lead_suit: Option<Suit>,
    /// Both hands, seat-indexed.
    pub hands: [Hand; PLAYERS],
    /// Cumulative scores, seat-indexed. Monotonically non-decreasing.
    pub scores: [u8; PLAYERS],
}
