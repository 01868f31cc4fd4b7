//! Analysis of simulation results: aggregate statistics from a JSONL
//! results file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kingless::domain::rules::ROUNDS_PER_HAND;

use crate::metrics::GameMetrics;

/// Load a JSONL results file into typed records.
pub fn analyze_jsonl<P: AsRef<Path>>(
    path: P,
) -> Result<AnalysisResults, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut games = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let game: GameMetrics = serde_json::from_str(&line)?;
        games.push(game);
    }

    Ok(AnalysisResults::from_games(games))
}

/// Analysis results container.
pub struct AnalysisResults {
    games: Vec<GameMetrics>,
}

#[derive(Default, Debug)]
pub struct WinStats {
    pub wins: u32,
    pub ties: u32,
    pub total_games: u32,
    pub win_rate: f64,
}

#[derive(Default, Debug)]
pub struct ScoreStats {
    pub total_score: i64,
    pub game_count: u32,
    pub avg_score: f64,
}

impl AnalysisResults {
    pub fn from_games(games: Vec<GameMetrics>) -> Self {
        Self { games }
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Win rates by policy name. A policy playing both seats of a game is
    /// counted once per seat.
    pub fn win_stats_by_policy(&self) -> HashMap<String, WinStats> {
        let mut stats: HashMap<String, WinStats> = HashMap::new();

        for game in &self.games {
            for (seat, policy) in game.config.policies.iter().enumerate() {
                let entry = stats.entry(policy.clone()).or_default();
                entry.total_games += 1;
                match game.result.winner {
                    Some(winner) if winner as usize == seat => entry.wins += 1,
                    None => entry.ties += 1,
                    _ => {}
                }
            }
        }

        for stat in stats.values_mut() {
            if stat.total_games > 0 {
                stat.win_rate = (stat.wins as f64 / stat.total_games as f64) * 100.0;
            }
        }

        stats
    }

    /// Average final score by policy name.
    pub fn avg_scores_by_policy(&self) -> HashMap<String, ScoreStats> {
        let mut stats: HashMap<String, ScoreStats> = HashMap::new();

        for game in &self.games {
            for (seat, policy) in game.config.policies.iter().enumerate() {
                let entry = stats.entry(policy.clone()).or_default();
                entry.total_score += i64::from(game.result.final_scores[seat]);
                entry.game_count += 1;
            }
        }

        for stat in stats.values_mut() {
            if stat.game_count > 0 {
                stat.avg_score = stat.total_score as f64 / f64::from(stat.game_count);
            }
        }

        stats
    }

    /// How games ended, by outcome kind.
    pub fn outcome_counts(&self) -> HashMap<String, u32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for game in &self.games {
            *counts.entry(game.result.outcome.clone()).or_default() += 1;
        }
        counts
    }

    /// Estimated probability that the trick leader wins, per round number
    /// (1..=8), across every recorded trick.
    pub fn leader_win_rate_by_round(&self) -> Vec<(u8, f64)> {
        let mut played = [0u32; ROUNDS_PER_HAND as usize];
        let mut led_and_won = [0u32; ROUNDS_PER_HAND as usize];

        for game in &self.games {
            for trick in &game.tricks {
                let idx = usize::from(trick.round_no - 1);
                played[idx] += 1;
                if trick.winner == trick.leader {
                    led_and_won[idx] += 1;
                }
            }
        }

        (0..ROUNDS_PER_HAND as usize)
            .filter(|&i| played[i] > 0)
            .map(|i| (i as u8 + 1, f64::from(led_and_won[i]) / f64::from(played[i])))
            .collect()
    }
}
