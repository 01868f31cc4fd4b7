//! The game state machine: deck and hand lifecycle, trick orchestration,
//! leader rotation, scoring, and termination.

use thiserror::Error;
use tracing::debug;

use crate::ai::{CardPolicy, PolicyError};
use crate::domain::rules::{HAND_SIZE, PLAYERS, REDEAL_MIN_CARDS, ROUNDS_PER_HAND};
use crate::domain::scoring::{check_early_end, higher_score_winner, GameOutcome};
use crate::domain::state::{opponent, GameState, Phase, Seat};
use crate::domain::tricks::{resolve_trick, TrickRecord};
use crate::domain::{Card, Deck, DomainError, Hand, PlayerView, Suit};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("policy error (seat {seat}): {source}")]
    Policy {
        seat: Seat,
        #[source]
        source: PolicyError,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Game number carried into log records.
    pub game_no: u32,
    /// End unconditionally after the first 8-round hand.
    pub short_game: bool,
    /// Deck shuffle seed; None uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_no: 1,
            short_game: false,
            seed: None,
        }
    }
}

/// What a re-deal attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// Fresh hands dealt; play continues.
    Dealt,
    /// The deck could not supply two hands; the game is over.
    Finished(GameOutcome),
}

/// Result of a completed game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub final_scores: [u8; PLAYERS],
    pub hands_played: u32,
    /// Every resolved trick, in play order.
    pub records: Vec<TrickRecord>,
}

/// A single game in flight. Owns the deck and the game state; decision
/// policies are supplied per call so the same engine drives humans and
/// bots alike.
pub struct GameEngine {
    deck: Deck,
    state: GameState,
    revealed: Vec<Card>,
    records: Vec<TrickRecord>,
    short_game: bool,
}

impl GameEngine {
    /// Start a game on a freshly shuffled deck and deal the first hands.
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        Self::with_deck(Deck::shuffled(config.seed), config)
    }

    /// Start a game on an exact deck order (stacked decks, reproductions).
    pub fn with_deck(mut deck: Deck, config: GameConfig) -> Result<Self, DomainError> {
        let hands = Self::deal_hands(&mut deck)?;
        debug!(game_no = config.game_no, hand_no = 1, "dealt opening hands");
        Ok(Self {
            deck,
            state: GameState {
                phase: Phase::Playing { round_no: 1 },
                game_no: config.game_no,
                hand_no: 1,
                leader: 0,
                lead_suit: None,
                hands,
                scores: [0; PLAYERS],
            },
            revealed: Vec::new(),
            records: Vec::new(),
            short_game: config.short_game,
        })
    }

    fn deal_hands(deck: &mut Deck) -> Result<[Hand; PLAYERS], DomainError> {
        Ok([
            Hand::new(deck.deal(HAND_SIZE)?),
            Hand::new(deck.deal(HAND_SIZE)?),
        ])
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards revealed from the deck after each trick, in order.
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    pub fn records(&self) -> &[TrickRecord] {
        &self.records
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state.phase {
            Phase::Terminated(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Play one trick: leader's policy first (establishing the lead suit),
    /// then the follower's, then resolution, scoring, leader rotation, and
    /// the post-trick reveal draw.
    pub fn play_trick(
        &mut self,
        policies: &[Box<dyn CardPolicy>; PLAYERS],
    ) -> Result<TrickRecord, EngineError> {
        let Phase::Playing { round_no } = self.state.phase else {
            return Err(DomainError::PhaseMismatch.into());
        };

        let leader = self.state.leader;
        let follower = opponent(leader);

        let leader_card = self.take_card(leader, None, round_no, policies)?;
        let lead = leader_card.suit;
        self.state.lead_suit = Some(lead);

        // The violation check needs the follower's hand as it stood before
        // the follower's card left it.
        let follower_had_lead = self.state.hands[follower as usize].has_suit(lead);
        let follower_card = self.take_card(follower, Some(lead), round_no, policies)?;

        let resolution = resolve_trick(leader, leader_card, follower_card, follower_had_lead);
        self.state.scores[resolution.winner as usize] += 1;
        self.state.leader = resolution.winner;
        self.state.lead_suit = None;

        let revealed = self.deck.draw()?;
        self.revealed.push(revealed);

        debug!(
            round_no,
            leader,
            winner = resolution.winner,
            violation = resolution.violation,
            "trick resolved"
        );

        let mut cards = [leader_card; PLAYERS];
        cards[follower as usize] = follower_card;
        let record = TrickRecord {
            game_no: self.state.game_no,
            hand_no: self.state.hand_no,
            round_no,
            leader,
            cards,
            lead_suit: lead,
            winner: resolution.winner,
            violation: resolution.violation,
            revealed,
            hands_after: [
                self.state.hands[0].cards().to_vec(),
                self.state.hands[1].cards().to_vec(),
            ],
            scores: self.state.scores,
        };
        self.records.push(record.clone());

        self.state.phase = if let Some(outcome) = check_early_end(&self.state.scores) {
            Phase::Terminated(outcome)
        } else if round_no >= ROUNDS_PER_HAND {
            if self.short_game {
                Phase::Terminated(GameOutcome::ShortGame {
                    winner: higher_score_winner(&self.state.scores),
                })
            } else {
                Phase::HandComplete
            }
        } else {
            Phase::Playing {
                round_no: round_no + 1,
            }
        };

        Ok(record)
    }

    /// After a completed hand: re-deal if the deck still holds two hands,
    /// otherwise finish the game on the current scores. An underfull deck
    /// is a designed terminal state, not an error.
    pub fn deal_next_hand(&mut self) -> Result<DealOutcome, DomainError> {
        if self.state.phase != Phase::HandComplete {
            return Err(DomainError::PhaseMismatch);
        }

        if self.deck.len() < REDEAL_MIN_CARDS {
            let outcome = GameOutcome::DeckExhausted {
                winner: higher_score_winner(&self.state.scores),
            };
            self.state.phase = Phase::Terminated(outcome);
            debug!(deck_len = self.deck.len(), "deck exhausted, game over");
            return Ok(DealOutcome::Finished(outcome));
        }

        self.state.hands = Self::deal_hands(&mut self.deck)?;
        self.state.hand_no += 1;
        self.state.phase = Phase::Playing { round_no: 1 };
        debug!(
            hand_no = self.state.hand_no,
            deck_len = self.deck.len(),
            "dealt new hands"
        );
        Ok(DealOutcome::Dealt)
    }

    /// Drive the game to its end. Intended for headless play; interactive
    /// callers loop over `play_trick` / `deal_next_hand` themselves to
    /// narrate between tricks.
    pub fn run_to_completion(
        mut self,
        policies: &[Box<dyn CardPolicy>; PLAYERS],
    ) -> Result<GameResult, EngineError> {
        loop {
            match self.state.phase {
                Phase::Playing { .. } => {
                    self.play_trick(policies)?;
                }
                Phase::HandComplete => {
                    self.deal_next_hand()?;
                }
                Phase::Terminated(outcome) => {
                    return Ok(GameResult {
                        outcome,
                        final_scores: self.state.scores,
                        hands_played: self.state.hand_no,
                        records: self.records,
                    });
                }
            }
        }
    }

    fn take_card(
        &mut self,
        seat: Seat,
        lead_suit: Option<Suit>,
        round_no: u8,
        policies: &[Box<dyn CardPolicy>; PLAYERS],
    ) -> Result<Card, EngineError> {
        let view = PlayerView {
            seat,
            hand: self.state.hands[seat as usize].cards(),
            lead_suit,
            round_no,
            scores: self.state.scores,
        };
        let card = policies[seat as usize]
            .choose_card(&view)
            .map_err(|source| EngineError::Policy { seat, source })?;
        // Removal directly after the choice; a card outside the hand is a
        // defect in the policy, not a recoverable condition.
        let removed = self.state.hands[seat as usize].remove_card(card)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::ai::GreedyBot;
    use crate::domain::try_parse_cards;

    /// Plays a fixed sequence of cards, one per invocation.
    #[derive(Debug)]
    struct Scripted {
        plays: Mutex<VecDeque<Card>>,
    }

    impl Scripted {
        fn new(tokens: &[&str]) -> Self {
            Self {
                plays: Mutex::new(
                    try_parse_cards(tokens.iter().copied())
                        .expect("valid script tokens")
                        .into(),
                ),
            }
        }
    }

    impl CardPolicy for Scripted {
        fn choose_card(&self, _view: &PlayerView<'_>) -> Result<Card, PolicyError> {
            self.plays
                .lock()
                .map_err(|e| PolicyError::Internal(e.to_string()))?
                .pop_front()
                .ok_or_else(|| PolicyError::InvalidMove("script exhausted".into()))
        }
    }

    fn policies(
        seat0: impl CardPolicy + 'static,
        seat1: impl CardPolicy + 'static,
    ) -> [Box<dyn CardPolicy>; PLAYERS] {
        [Box::new(seat0), Box::new(seat1)]
    }

    /// Build a deck that deals `h0` then `h1` and then yields the given
    /// sections in order (hand cards in hand order, later sections after
    /// earlier ones).
    fn stacked_deck(sections: &[&[&str]]) -> Deck {
        let mut cards: Vec<Card> = Vec::new();
        for section in sections.iter().rev() {
            let parsed = try_parse_cards(section.iter().copied()).expect("valid deck tokens");
            cards.extend(parsed.iter().rev());
        }
        Deck::from_cards(cards)
    }

    const H0A: [&str; 8] = ["AS", "QS", "JS", "TS", "9S", "8S", "7S", "6S"];
    const H1A: [&str; 8] = ["5S", "4S", "3S", "2S", "2H", "3H", "4H", "5H"];
    const REVEALS1: [&str; 8] = ["2D", "3D", "4D", "5D", "6D", "7D", "8D", "9D"];
    const H0B: [&str; 8] = ["AC", "QC", "JC", "TC", "9C", "8C", "7C", "6C"];
    const H1B: [&str; 8] = ["5C", "4C", "3C", "2C", "6H", "7H", "8H", "9H"];
    const REVEALS2: [&str; 8] = ["TD", "JD", "QD", "AD", "TH", "JH", "QH", "AH"];

    fn moon_deck() -> Deck {
        stacked_deck(&[&H0A, &H1A, &REVEALS1, &H0B, &H1B, &REVEALS2])
    }

    #[test]
    fn stacked_deck_deals_as_written() {
        let mut deck = moon_deck();
        assert_eq!(deck.len(), 48);
        let h0 = deck.deal(8).unwrap();
        assert_eq!(h0, try_parse_cards(H0A).unwrap());
        let h1 = deck.deal(8).unwrap();
        assert_eq!(h1, try_parse_cards(H1A).unwrap());
        assert_eq!(deck.draw().unwrap().to_string(), "2D");
    }

    #[test]
    fn expert_follower_must_follow_suit_and_lose_to_the_ace() {
        // Seat 0 leads the ace of hearts; the expert bot holds one lower
        // heart and nothing else in the suit, so it must spend it and lose.
        let deck = stacked_deck(&[
            &["AH", "2C", "3C", "4C", "5C", "6C", "7C", "8C"],
            &["9H", "2S", "3S", "4S", "5S", "6S", "7S", "8S"],
            &["2D", "3D", "4D", "5D", "6D", "7D", "8D", "9D"],
            &["TC", "JC", "QC", "AC", "TS", "JS", "QS", "AS"],
            &["TD", "JD", "QD", "AD", "TH", "JH", "QH", "2H"],
            &["3H", "4H", "5H", "6H", "7H", "8H", "9C", "9S"],
        ]);
        let mut engine = GameEngine::with_deck(deck, GameConfig::default()).unwrap();
        let policies = policies(Scripted::new(&["AH"]), GreedyBot::new());

        let record = engine.play_trick(&policies).unwrap();
        assert_eq!(record.cards[1].to_string(), "9H");
        assert_eq!(record.lead_suit, Suit::Hearts);
        assert_eq!(record.winner, 0);
        assert!(!record.violation);
        assert_eq!(engine.state().scores, [1, 0]);
        assert_eq!(engine.state().leader, 0);
    }

    #[test]
    fn shoot_the_moon_terminates_at_16_0() {
        let engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let seat0: Vec<&str> = H0A.iter().chain(H0B.iter()).copied().collect();
        let seat1: Vec<&str> = H1A.iter().chain(H1B.iter()).copied().collect();
        let policies = policies(Scripted::new(&seat0), Scripted::new(&seat1));

        let result = engine.run_to_completion(&policies).unwrap();
        assert_eq!(result.outcome, GameOutcome::ShootTheMoon { winner: 0 });
        assert_eq!(result.final_scores, [16, 0]);
        assert_eq!(result.records.len(), 16);
        assert_eq!(result.hands_played, 2);
    }

    #[test]
    fn guaranteed_win_terminates_mid_hand() {
        // Seat 1 takes the opening trick, then seat 0 runs the table; the
        // game must stop the instant the score reaches 9-1.
        let deck = stacked_deck(&[
            &["2S", "AS", "QS", "JS", "TS", "9S", "8S", "7S"],
            &["6S", "5S", "4S", "3S", "2H", "3H", "4H", "5H"],
            &REVEALS1,
            &H0B,
            &H1B,
            &REVEALS2,
        ]);
        let engine = GameEngine::with_deck(deck, GameConfig::default()).unwrap();
        let seat0 = Scripted::new(&["2S", "AS", "QS", "JS", "TS", "9S", "8S", "7S", "AC", "QC"]);
        let seat1 = Scripted::new(&["6S", "5S", "4S", "3S", "2H", "3H", "4H", "5H", "5C", "4C"]);
        let policies = policies(seat0, seat1);

        let result = engine.run_to_completion(&policies).unwrap();
        assert_eq!(result.outcome, GameOutcome::GuaranteedWin { winner: 0 });
        assert_eq!(result.final_scores, [9, 1]);
        assert_eq!(result.records.len(), 10);
    }

    #[test]
    fn deck_exhaustion_with_equal_scores_is_a_tie() {
        // Winners alternate every trick; both hands split 4-4.
        let deck = stacked_deck(&[
            &["2S", "4S", "6S", "8S", "3H", "5H", "7H", "9H"],
            &["3S", "5S", "7S", "9S", "2H", "4H", "6H", "8H"],
            &["TS", "JS", "QS", "AS", "TH", "JH", "QH", "AH"],
            &["2C", "4C", "6C", "8C", "3D", "5D", "7D", "9D"],
            &["3C", "5C", "7C", "9C", "2D", "4D", "6D", "8D"],
            &["TC", "JC", "QC", "AC", "TD", "JD", "QD", "AD"],
        ]);
        let engine = GameEngine::with_deck(deck, GameConfig::default()).unwrap();
        let seat0 = Scripted::new(&[
            "2S", "3H", "4S", "5H", "6S", "7H", "8S", "9H", //
            "2C", "3D", "4C", "5D", "6C", "7D", "8C", "9D",
        ]);
        let seat1 = Scripted::new(&[
            "3S", "2H", "5S", "4H", "7S", "6H", "9S", "8H", //
            "3C", "2D", "5C", "4D", "7C", "6D", "9C", "8D",
        ]);
        let policies = policies(seat0, seat1);

        let result = engine.run_to_completion(&policies).unwrap();
        assert_eq!(result.outcome, GameOutcome::DeckExhausted { winner: None });
        assert_eq!(result.final_scores, [8, 8]);
        assert_eq!(result.records.len(), 16);
        assert_eq!(result.hands_played, 2);
    }

    #[test]
    fn short_game_ends_after_one_hand_regardless_of_deck() {
        let config = GameConfig {
            short_game: true,
            ..GameConfig::default()
        };
        let engine = GameEngine::with_deck(moon_deck(), config).unwrap();
        let policies = policies(Scripted::new(&H0A), Scripted::new(&H1A));

        let result = engine.run_to_completion(&policies).unwrap();
        assert_eq!(result.outcome, GameOutcome::ShortGame { winner: Some(0) });
        assert_eq!(result.final_scores, [8, 0]);
        assert_eq!(result.records.len(), 8);
        assert_eq!(result.hands_played, 1);
    }

    #[test]
    fn follow_suit_violation_awards_the_leader() {
        // Seat 1 still holds spades but dumps a heart: illegal, leader wins.
        let mut engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let policies = policies(Scripted::new(&["6S"]), Scripted::new(&["2H"]));

        let record = engine.play_trick(&policies).unwrap();
        assert!(record.violation);
        assert_eq!(record.winner, 0);
        assert_eq!(engine.state().scores, [1, 0]);
    }

    #[test]
    fn violation_check_uses_the_pre_play_hand() {
        // Seat 1's only spade is the card it plays; following with it is
        // legal and must not be flagged just because the hand afterwards
        // holds no spades.
        let deck = stacked_deck(&[
            &["6S", "2C", "3C", "4C", "5C", "6C", "7C", "8C"],
            &["7S", "2H", "3H", "4H", "5H", "6H", "7H", "8H"],
            &REVEALS1,
            &["9C", "TC", "JC", "QC", "AC", "9H", "TH", "JH"],
            &["QH", "AH", "2S", "3S", "4S", "5S", "8S", "9S"],
            &["TS", "JS", "QS", "AS", "TD", "JD", "QD", "AD"],
        ]);
        let mut engine = GameEngine::with_deck(deck, GameConfig::default()).unwrap();
        let policies = policies(Scripted::new(&["6S"]), Scripted::new(&["7S"]));

        let record = engine.play_trick(&policies).unwrap();
        assert!(!record.violation);
        assert_eq!(record.winner, 1);
    }

    #[test]
    fn scores_are_monotonic_and_one_point_per_trick() {
        let engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let seat0: Vec<&str> = H0A.iter().chain(H0B.iter()).copied().collect();
        let seat1: Vec<&str> = H1A.iter().chain(H1B.iter()).copied().collect();
        let policies = policies(Scripted::new(&seat0), Scripted::new(&seat1));

        let result = engine.run_to_completion(&policies).unwrap();
        let mut prev = [0u8; PLAYERS];
        for record in &result.records {
            let delta0 = record.scores[0] - prev[0];
            let delta1 = record.scores[1] - prev[1];
            assert_eq!(delta0 + delta1, 1, "exactly one point per trick");
            prev = record.scores;
        }
    }

    #[test]
    fn one_card_is_revealed_per_trick() {
        let mut engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let policies = policies(Scripted::new(&H0A), Scripted::new(&H1A));
        for expected in 1..=4usize {
            engine.play_trick(&policies).unwrap();
            assert_eq!(engine.revealed().len(), expected);
            assert_eq!(engine.records().len(), expected);
            assert_eq!(engine.deck_len(), 48 - 16 - expected);
        }
        assert_eq!(engine.revealed()[0].to_string(), "2D");
    }

    #[test]
    fn winner_leads_the_next_trick() {
        let engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let seat0: Vec<&str> = H0A.iter().chain(H0B.iter()).copied().collect();
        let seat1: Vec<&str> = H1A.iter().chain(H1B.iter()).copied().collect();
        let policies = policies(Scripted::new(&seat0), Scripted::new(&seat1));

        let result = engine.run_to_completion(&policies).unwrap();
        for pair in result.records.windows(2) {
            assert_eq!(pair[1].leader, pair[0].winner);
        }
    }

    #[test]
    fn play_trick_after_termination_is_a_phase_mismatch() {
        let config = GameConfig {
            short_game: true,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::with_deck(moon_deck(), config).unwrap();
        let policies = policies(Scripted::new(&H0A), Scripted::new(&H1A));
        for _ in 0..8 {
            engine.play_trick(&policies).unwrap();
        }
        assert!(matches!(
            engine.play_trick(&policies),
            Err(EngineError::Domain(DomainError::PhaseMismatch))
        ));
    }

    #[test]
    fn deal_next_hand_mid_hand_is_a_phase_mismatch() {
        let mut engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        assert_eq!(
            engine.deal_next_hand(),
            Err(DomainError::PhaseMismatch)
        );
    }

    #[test]
    fn policy_playing_a_card_it_does_not_hold_is_a_defect() {
        let mut engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let policies = policies(Scripted::new(&["AD"]), Scripted::new(&H1A));
        assert!(matches!(
            engine.play_trick(&policies),
            Err(EngineError::Domain(DomainError::CardNotInHand))
        ));
    }

    #[test]
    fn greedy_self_play_reaches_a_terminal_state() {
        let engine = GameEngine::with_deck(moon_deck(), GameConfig::default()).unwrap();
        let policies = policies(GreedyBot::new(), GreedyBot::new());
        let result = engine.run_to_completion(&policies).unwrap();
        let total: u32 = result.final_scores.iter().map(|&s| u32::from(s)).sum();
        assert_eq!(total as usize, result.records.len());
        match result.outcome {
            GameOutcome::DeckExhausted { winner } | GameOutcome::ShortGame { winner } => {
                assert_eq!(winner, higher_score_winner(&result.final_scores));
            }
            GameOutcome::ShootTheMoon { winner } | GameOutcome::GuaranteedWin { winner } => {
                assert!(result.final_scores[winner as usize] > result.final_scores[opponent(winner) as usize]);
            }
        }
    }
}
