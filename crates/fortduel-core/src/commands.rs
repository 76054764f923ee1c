//! Commands sent from the embedding application to the engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible caller actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleCommand {
    /// Build the world from the engine's config and start ticking.
    /// Also restarts from a completed battle (rematch).
    Start,
    /// Freeze the simulation; no state mutates while paused.
    Pause,
    /// Continue from exactly where Pause left off.
    Resume,
}
