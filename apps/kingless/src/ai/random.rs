//! Random bot - the "easy" difficulty.
//!
//! Chooses uniformly at random among the cards currently in hand, with no
//! regard for the lead suit; the engine's follow-suit violation rule
//! handles the fallout. Seedable for reproducible games and tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{CardPolicy, PolicyError};
use crate::domain::{Card, PlayerView};

#[derive(Debug)]
pub struct RandomBot {
    /// RNG behind a mutex: `choose_card` takes `&self` but the generator
    /// needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub const NAME: &'static str = "easy";
    pub const VERSION: &'static str = "1.0.0";

    /// `seed` pins the RNG for reproducible behavior; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl CardPolicy for RandomBot {
    fn choose_card(&self, view: &PlayerView<'_>) -> Result<Card, PolicyError> {
        if view.hand.is_empty() {
            return Err(PolicyError::InvalidMove("no cards in hand".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PolicyError::Internal(format!("RNG lock poisoned: {e}")))?;

        view.hand
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| PolicyError::Internal("failed to choose random card".into()))
    }
}
