//! Decision policy trait definition.

use std::fmt;

use crate::domain::{Card, PlayerView};

/// Errors that can occur while a policy chooses a card.
#[derive(Debug)]
pub enum PolicyError {
    /// The policy hit an internal failure (poisoned lock, closed input).
    Internal(String),
    /// The policy could not produce a card for this view.
    InvalidMove(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::Internal(msg) => write!(f, "policy internal error: {msg}"),
            PolicyError::InvalidMove(msg) => write!(f, "policy invalid move: {msg}"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// A card-choosing participant: human front-end or bot.
///
/// Implementations see only their own [`PlayerView`] and return a card that
/// must be present in `view.hand`; the engine removes it from the hand
/// immediately after the choice, so choose-and-remove is one step from the
/// state machine's perspective.
pub trait CardPolicy: Send + Sync + fmt::Debug {
    fn choose_card(&self, view: &PlayerView<'_>) -> Result<Card, PolicyError>;
}
