//! Metrics collection and output for simulation results.

use kingless::domain::TrickRecord;
use kingless::engine::GameResult;
use serde::{Deserialize, Serialize};

/// Complete per-game record for output. The reporting side consumes these
/// structured records directly; nothing is re-parsed from rendered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfigMetrics,
    pub result: GameResultMetrics,
    pub tricks: Vec<TrickRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfigMetrics {
    /// Policy names, seat-indexed.
    pub policies: [String; 2],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResultMetrics {
    pub final_scores: [u8; 2],
    /// Winning seat; None is a tie.
    pub winner: Option<u8>,
    /// Outcome kind: shoot_the_moon, guaranteed_win, deck_exhausted.
    pub outcome: String,
    pub hands_played: u32,
    pub tricks_played: u32,
    pub duration_ms: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    policies: [String; 2],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfigMetrics {
            policies,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winner: result.outcome.winner(),
            outcome: result.outcome.kind().to_string(),
            hands_played: result.hands_played,
            tricks_played: result.records.len() as u32,
            duration_ms,
        },
        tricks: result.records.clone(),
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: String,
    pub outcome: String,
    pub seat0_score: u8,
    pub seat1_score: u8,
    pub seat0_policy: String,
    pub seat1_policy: String,
    pub hands_played: u32,
    pub tricks_played: u32,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: match metrics.result.winner {
                Some(seat) => seat.to_string(),
                None => "tie".to_string(),
            },
            outcome: metrics.result.outcome.clone(),
            seat0_score: metrics.result.final_scores[0],
            seat1_score: metrics.result.final_scores[1],
            seat0_policy: metrics.config.policies[0].clone(),
            seat1_policy: metrics.config.policies[1].clone(),
            hands_played: metrics.result.hands_played,
            tricks_played: metrics.result.tricks_played,
        }
    }
}
