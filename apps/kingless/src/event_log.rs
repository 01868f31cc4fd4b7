//! Append-only CSV game log.
//!
//! One row per resolved trick plus a final summary row per game. The
//! header is written only when the file is empty, so multiple games (and
//! multiple process runs) append cleanly to the same log. The engine
//! never reads this back.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, GameOutcome, TrickRecord};
use crate::error::AppError;

const HEADER: [&str; 15] = [
    "game",
    "hand",
    "round",
    "leader",
    "seat0_card",
    "seat1_card",
    "lead_suit",
    "violation",
    "winner",
    "revealed",
    "seat0_hand",
    "seat1_hand",
    "seat0_score",
    "seat1_score",
    "outcome",
];

#[derive(Debug, Serialize)]
struct LogRow {
    game: u32,
    hand: u32,
    round: String,
    leader: String,
    seat0_card: String,
    seat1_card: String,
    lead_suit: String,
    violation: String,
    winner: String,
    revealed: String,
    seat0_hand: String,
    seat1_hand: String,
    seat0_score: u8,
    seat1_score: u8,
    outcome: String,
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct EventLog<W: Write> {
    writer: csv::Writer<W>,
}

impl EventLog<std::fs::File> {
    /// Open (or create) the log at `path` in append mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        let needs_header = file.metadata()?.len() == 0;
        Self::from_writer(file, needs_header)
    }
}

impl<W: Write> EventLog<W> {
    /// Wrap an arbitrary writer; `write_header` should be true only when
    /// the destination is empty.
    pub fn from_writer(writer: W, write_header: bool) -> Result<Self, AppError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        if write_header {
            writer.write_record(HEADER)?;
        }
        Ok(Self { writer })
    }

    /// Append one trick row and flush.
    pub fn log_trick(&mut self, record: &TrickRecord) -> Result<(), AppError> {
        let row = LogRow {
            game: record.game_no,
            hand: record.hand_no,
            round: record.round_no.to_string(),
            leader: record.leader.to_string(),
            seat0_card: record.cards[0].to_string(),
            seat1_card: record.cards[1].to_string(),
            lead_suit: format!("{:?}", record.lead_suit),
            violation: record.violation.to_string(),
            winner: record.winner.to_string(),
            revealed: record.revealed.to_string(),
            seat0_hand: join_cards(&record.hands_after[0]),
            seat1_hand: join_cards(&record.hands_after[1]),
            seat0_score: record.scores[0],
            seat1_score: record.scores[1],
            outcome: String::new(),
        };
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Append the final summary row for a finished game and flush.
    pub fn log_game_end(
        &mut self,
        game_no: u32,
        hand_no: u32,
        outcome: &GameOutcome,
        scores: [u8; PLAYERS],
    ) -> Result<(), AppError> {
        let winner = match outcome.winner() {
            Some(seat) => seat.to_string(),
            None => "tie".to_string(),
        };
        let row = LogRow {
            game: game_no,
            hand: hand_no,
            round: "final".to_string(),
            leader: String::new(),
            seat0_card: String::new(),
            seat1_card: String::new(),
            lead_suit: String::new(),
            violation: String::new(),
            winner,
            revealed: String::new(),
            seat0_hand: String::new(),
            seat1_hand: String::new(),
            seat0_score: scores[0],
            seat1_score: scores[1],
            outcome: outcome.kind().to_string(),
        };
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
