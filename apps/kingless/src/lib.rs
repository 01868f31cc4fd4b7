//! Kingless: a two-player trick-taking card game on a 48-card deck with
//! the kings removed.
//!
//! The library splits into:
//! - [`domain`]: pure game logic (cards, deck, hands, trick resolution,
//!   scoring, termination)
//! - [`ai`]: pluggable decision policies (the bots, and the trait the
//!   human front-end implements)
//! - [`engine`]: the game state machine driving deals, tricks, leader
//!   rotation, and termination checks
//! - [`event_log`]: the append-only CSV game log
//! - [`cli`]: terminal rendering and the human input collaborator

pub mod ai;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod event_log;
pub mod telemetry;

pub use engine::{DealOutcome, GameConfig, GameEngine, GameResult};
pub use error::AppError;
