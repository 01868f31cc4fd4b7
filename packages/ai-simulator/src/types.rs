//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Full per-game records as JSON lines, plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Summary,
}
