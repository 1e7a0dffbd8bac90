use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.4;

/// Chance that the bot ignores the search and plays a random legal cell.
/// Keeps a perfect player beatable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub random_move_probability: f64,
}

impl Difficulty {
    pub fn new(random_move_probability: f64) -> Result<Self, String> {
        let difficulty = Self {
            random_move_probability,
        };
        difficulty.validate()?;
        Ok(difficulty)
    }

    pub fn perfect() -> Self {
        Self {
            random_move_probability: 0.0,
        }
    }

    pub fn random() -> Self {
        Self {
            random_move_probability: 1.0,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
        }
    }
}

impl Validate for Difficulty {
    fn validate(&self) -> Result<(), String> {
        let p = self.random_move_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(format!(
                "Random move probability must be between 0.0 and 1.0, got {}",
                p
            ));
        }
        Ok(())
    }
}
