//! Battle configuration supplied by the setup layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::TeamId;

/// One contender in the battle. Name and color are rendering-only;
/// the engine identifies teams by roster index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    /// Display color as a hex string, e.g. "#e63946".
    pub color: String,
}

/// Complete configuration for one battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Ordered roster; index i becomes TeamId(i).
    pub teams: Vec<TeamSpec>,
    pub arena_width: f64,
    pub arena_height: f64,
    /// Fort starting hit points (see `FortTier` for the standard tiers).
    pub fort_hp: i32,
    /// Initial roster size per team.
    pub soldiers_per_team: usize,
    /// RNG seed. Same seed and config reproduce the same battle.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            teams: vec![
                TeamSpec {
                    name: "Crimson".to_string(),
                    color: "#e63946".to_string(),
                },
                TeamSpec {
                    name: "Azure".to_string(),
                    color: "#4361ee".to_string(),
                },
            ],
            arena_width: 400.0,
            arena_height: 600.0,
            fort_hp: FORT_HP_DEFAULT,
            soldiers_per_team: SOLDIERS_PER_TEAM,
            seed: 42,
        }
    }
}

/// Validation failures for a battle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("battle needs between 2 and 4 teams, got {0}")]
    TeamCount(usize),
    #[error("team {0} has an empty display name")]
    EmptyTeamName(usize),
    #[error("fort hp must be positive, got {0}")]
    NonPositiveFortHp(i32),
    #[error("arena {width}x{height} is too small to hold the fort ring")]
    ArenaTooSmall { width: f64, height: f64 },
}

impl BattleConfig {
    /// Check the preconditions the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.teams.len();
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&n) {
            return Err(ConfigError::TeamCount(n));
        }
        for (i, team) in self.teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(ConfigError::EmptyTeamName(i));
            }
        }
        if self.fort_hp <= 0 {
            return Err(ConfigError::NonPositiveFortHp(self.fort_hp));
        }
        // The fort ring must leave room for the forts themselves.
        let ring = self.arena_width.min(self.arena_height) * FORT_RING_FACTOR;
        if ring < FORT_RADIUS * 2.0 {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        Ok(())
    }

    /// Team ids in roster order.
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        (0..self.teams.len()).map(|i| TeamId(i as u8))
    }
}
