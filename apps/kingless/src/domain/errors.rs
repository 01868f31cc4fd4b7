use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyDeck,
    InsufficientCards { needed: usize, available: usize },
    CardNotInHand,
    IndexOutOfRange { index: usize, len: usize },
    PhaseMismatch,
    UnknownPolicy(String),
    ParseCard(String),
    Other(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::EmptyDeck => write!(f, "empty deck"),
            DomainError::InsufficientCards { needed, available } => {
                write!(f, "insufficient cards: need {needed}, have {available}")
            }
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for hand of {len}")
            }
            DomainError::PhaseMismatch => write!(f, "phase mismatch"),
            DomainError::UnknownPolicy(name) => write!(f, "unknown bot difficulty: {name}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
            DomainError::Other(s) => write!(f, "domain error: {s}"),
        }
    }
}

impl Error for DomainError {}
