//! Battle snapshot — the complete visible state handed to the renderer
//! after each tick. Read-only from the renderer's perspective.

use serde::{Deserialize, Serialize};

use crate::enums::BattlePhase;
use crate::events::BattleEvent;
use crate::types::{Position, SimTime, TeamId};

/// Complete battle state for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub soldiers: Vec<SoldierView>,
    pub projectiles: Vec<ProjectileView>,
    pub forts: Vec<FortView>,
    /// Per-team status in roster order.
    pub teams: Vec<TeamStatus>,
    /// Teams whose fort has been destroyed, in elimination order.
    /// Cumulative and monotonically growing.
    pub eliminated: Vec<TeamId>,
    /// Winning team, stable once set.
    pub winner: Option<TeamId>,
    /// True iff the battle ended with no survivors on either side.
    pub stalemate: bool,
    /// Events from this tick, drained from the engine.
    pub events: Vec<BattleEvent>,
}

/// A soldier as drawn on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldierView {
    pub unit_id: u32,
    pub team: TeamId,
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub dead: bool,
    /// Death fade in [0, 1]; drives opacity and scale of the corpse.
    pub fade: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub unit_id: u32,
    pub team: TeamId,
    pub position: Position,
}

/// A fort and its remaining durability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortView {
    pub team: TeamId,
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub destroyed: bool,
}

/// Per-team HUD line: name, color, and living soldier count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamStatus {
    pub team: TeamId,
    pub name: String,
    pub color: String,
    pub alive: u32,
    pub eliminated: bool,
}
