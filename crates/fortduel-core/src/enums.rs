//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

/// Battle lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Engine constructed, battle not yet started.
    #[default]
    Setup,
    /// Ticking normally.
    Active,
    /// Gated: no tick logic runs, no state mutates.
    Paused,
    /// A winner or stalemate has been declared.
    Complete,
}

/// Fort durability presets exposed to the setup screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FortTier {
    /// Quick battle.
    Quick,
    /// Average battle.
    #[default]
    Standard,
    /// Long battle.
    Long,
}

impl FortTier {
    /// Fort starting hit points for this tier.
    pub fn hp(self) -> i32 {
        match self {
            FortTier::Quick => 5,
            FortTier::Standard => crate::constants::FORT_HP_DEFAULT,
            FortTier::Long => 20,
        }
    }
}

/// Result of a win detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Battle continues.
    Undecided,
    /// One team holds the last standing fort, or is the last with
    /// living soldiers once all forts are gone.
    Winner(TeamId),
    /// No forts standing and no soldiers alive.
    Stalemate,
}
