//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Battle logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

/// A soldier fighting for one team. Position is a separate component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Soldier {
    /// Battle-unique unit id (engine-owned counter, never reused).
    pub unit_id: u32,
    pub team: TeamId,
    /// Current hit points. Invariant: 0 <= hp <= max_hp.
    pub hp: i32,
    pub max_hp: i32,
    /// Ticks remaining until the next shot is allowed.
    pub cooldown_ticks: u32,
    /// Advisory target, recomputed every tick; never authoritative.
    pub target_id: Option<u32>,
    /// Set when hp reaches 0. Dead soldiers linger while fading.
    pub dead: bool,
    /// Death fade in [0, 1]; 1 = just died, 0 = ready for removal.
    pub fade: f64,
}

/// A projectile in flight. Position and Velocity are separate components;
/// velocity is fixed at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub unit_id: u32,
    /// Unit id of the soldier that fired it.
    pub shooter_id: u32,
    pub team: TeamId,
    /// Transitions true -> false exactly once (edge, hit, or fort hit).
    pub active: bool,
}

/// A team's fort. Created once per battle; marked destroyed in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fort {
    pub team: TeamId,
    /// Current hit points, clamped to 0 on destruction.
    pub hp: i32,
    pub max_hp: i32,
    /// True iff hp reached 0. Never reverts.
    pub destroyed: bool,
}

/// Per-fort reinforcement clock owned by the scheduler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnClock {
    /// Ticks accumulated since the last spawn.
    pub timer_ticks: u32,
    /// Target interval; recomputed from the decay curve on each fire.
    pub interval_ticks: u32,
}
