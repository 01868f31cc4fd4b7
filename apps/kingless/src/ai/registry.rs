//! How to register a bot difficulty
//!
//! 1) Implement `CardPolicy` for your type in its module.
//! 2) Add a `PolicyFactory` entry to the static list with a stable `name`
//!    and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed => same behavior (where applicable).

use super::greedy::GreedyBot;
use super::random::RandomBot;
use super::trait_def::CardPolicy;
use crate::domain::DomainError;

/// Factory definition for constructing bot policies.
pub struct PolicyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn CardPolicy>,
}

static POLICY_FACTORIES: &[PolicyFactory] = &[
    PolicyFactory {
        name: RandomBot::NAME,
        version: RandomBot::VERSION,
        make: make_random_bot,
    },
    PolicyFactory {
        name: GreedyBot::NAME,
        version: GreedyBot::VERSION,
        make: make_greedy_bot,
    },
];

/// Returns the statically registered bot factories.
pub fn registered_policies() -> &'static [PolicyFactory] {
    POLICY_FACTORIES
}

/// Finds a registered bot factory by difficulty name.
pub fn by_name(name: &str) -> Option<&'static PolicyFactory> {
    registered_policies()
        .iter()
        .find(|factory| factory.name == name)
}

/// Construct a bot policy for a difficulty name, or fail with
/// `UnknownPolicy` for unrecognized names.
pub fn create_policy(name: &str, seed: Option<u64>) -> Result<Box<dyn CardPolicy>, DomainError> {
    by_name(name)
        .map(|factory| (factory.make)(seed))
        .ok_or_else(|| DomainError::UnknownPolicy(name.to_string()))
}

fn make_random_bot(seed: Option<u64>) -> Box<dyn CardPolicy> {
    Box::new(RandomBot::new(seed))
}

fn make_greedy_bot(_seed: Option<u64>) -> Box<dyn CardPolicy> {
    Box::new(GreedyBot::new())
}
