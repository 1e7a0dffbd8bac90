use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::tictactoe::{Difficulty, OpponentKind};

pub const DEFAULT_SIMULATION_GAMES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub games: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub opponent: OpponentKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_SIMULATION_GAMES,
            seed: None,
            opponent: OpponentKind::default(),
        }
    }
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("Simulation game count must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub bot: Difficulty,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}
