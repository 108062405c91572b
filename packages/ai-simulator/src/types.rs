//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per match, plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

/// AI difficulty tier for a seat.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub fn difficulty(self) -> decree_engine::ai::Difficulty {
        match self {
            Tier::Easy => decree_engine::ai::Difficulty::Easy,
            Tier::Medium => decree_engine::ai::Difficulty::Medium,
            Tier::Hard => decree_engine::ai::Difficulty::Hard,
        }
    }

    pub fn name(self) -> &'static str {
        self.difficulty().as_str()
    }
}
