//! Events emitted by the simulation for UI and audio feedback.
//!
//! Each event is emitted exactly once per occurrence and delivered in
//! the snapshot of the tick on which it happened.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A soldier's hp reached 0 this tick.
    SoldierDown { team: TeamId },
    /// A fort was destroyed; the team is eliminated (its soldiers fight on).
    FortDestroyed { team: TeamId },
    /// A fort spawned a reinforcement soldier.
    Reinforcements { team: TeamId },
    /// The battle is decided.
    Victory { team: TeamId },
    /// All forts destroyed and all soldiers dead; no winner.
    Stalemate,
}
