//! Headless game runner for bot-vs-bot simulation.
//!
//! Runs games entirely in memory with no prompting or game-log overhead,
//! allowing rapid iteration on bot strategies.

use kingless::ai::{registry, CardPolicy};
use kingless::domain::rules::PLAYERS;
use kingless::domain::DomainError;
use kingless::engine::{EngineError, GameConfig, GameEngine, GameResult};

/// Build one policy per seat. Each seat gets its own derived RNG seed so
/// two bots of the same difficulty never share a random stream.
pub fn create_policies(
    names: [&str; PLAYERS],
    base_seed: u64,
) -> Result<[Box<dyn CardPolicy>; PLAYERS], DomainError> {
    Ok([
        registry::create_policy(names[0], Some(derive_policy_seed(base_seed, 0)))?,
        registry::create_policy(names[1], Some(derive_policy_seed(base_seed, 1)))?,
    ])
}

/// Seed for a seat's policy RNG, unique per (base, seat).
fn derive_policy_seed(base_seed: u64, seat: u64) -> u64 {
    base_seed
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(seat.wrapping_mul(100))
        .wrapping_add(1)
}

/// Seed for a game's deck shuffle, unique per (base, game).
pub fn derive_game_seed(base_seed: u64, game_no: u32) -> u64 {
    base_seed
        .wrapping_add(u64::from(game_no).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Run one complete game on a seeded deck.
pub fn run_game(
    game_no: u32,
    seed: u64,
    policies: &[Box<dyn CardPolicy>; PLAYERS],
) -> Result<GameResult, EngineError> {
    let engine = GameEngine::new(GameConfig {
        game_no,
        short_game: false,
        seed: Some(seed),
    })?;
    engine.run_to_completion(policies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_seeds_are_distinct_per_seat_and_game() {
        assert_ne!(derive_policy_seed(42, 0), derive_policy_seed(42, 1));
        assert_ne!(derive_game_seed(42, 1), derive_game_seed(42, 2));
        assert_ne!(derive_game_seed(42, 1), derive_policy_seed(42, 0));
    }

    #[test]
    fn expert_self_play_is_deterministic() {
        let policies = create_policies(["expert", "expert"], 7).unwrap();
        let a = run_game(1, derive_game_seed(7, 1), &policies).unwrap();
        let b = run_game(1, derive_game_seed(7, 1), &policies).unwrap();
        assert_eq!(a.final_scores, b.final_scores);
        assert_eq!(a.records.len(), b.records.len());
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(create_policies(["expert", "impossible"], 7).is_err());
    }
}
