//! Spatial queries: nearest enemy soldier and nearest enemy fort.
//!
//! Plain O(n) scans over per-tick collected views. Entity counts are
//! small enough that a spatial index would be wasted complexity.
//! Ties break to the first candidate in scan order.

use hecs::{Entity, World};

use fortduel_core::components::{Fort, Soldier};
use fortduel_core::types::{Position, TeamId};

/// Per-tick view of a living soldier, used by the movement and firing scans.
#[derive(Debug, Clone, Copy)]
pub struct SoldierRef {
    pub entity: Entity,
    pub unit_id: u32,
    pub team: TeamId,
    pub position: Position,
}

/// Per-tick view of a standing fort.
#[derive(Debug, Clone, Copy)]
pub struct FortRef {
    pub entity: Entity,
    pub team: TeamId,
    pub position: Position,
}

/// Collect every living soldier into a scan list.
pub fn collect_living_soldiers(world: &World) -> Vec<SoldierRef> {
    world
        .query::<(&Soldier, &Position)>()
        .iter()
        .filter(|(_, (soldier, _))| !soldier.dead)
        .map(|(entity, (soldier, pos))| SoldierRef {
            entity,
            unit_id: soldier.unit_id,
            team: soldier.team,
            position: *pos,
        })
        .collect()
}

/// Collect every non-destroyed fort into a scan list.
pub fn collect_standing_forts(world: &World) -> Vec<FortRef> {
    world
        .query::<(&Fort, &Position)>()
        .iter()
        .filter(|(_, (fort, _))| !fort.destroyed)
        .map(|(entity, (fort, pos))| FortRef {
            entity,
            team: fort.team,
            position: *pos,
        })
        .collect()
}

/// Nearest living soldier of a different team, or None if no enemy
/// soldier is alive.
pub fn nearest_enemy_soldier<'a>(
    team: TeamId,
    from: &Position,
    soldiers: &'a [SoldierRef],
) -> Option<&'a SoldierRef> {
    let mut nearest: Option<&SoldierRef> = None;
    let mut min_dist = f64::INFINITY;
    for candidate in soldiers {
        if candidate.team == team {
            continue;
        }
        let dist = from.distance_to(&candidate.position);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(candidate);
        }
    }
    nearest
}

/// Nearest standing fort of a different team, or None.
pub fn nearest_enemy_fort<'a>(
    team: TeamId,
    from: &Position,
    forts: &'a [FortRef],
) -> Option<&'a FortRef> {
    let mut nearest: Option<&FortRef> = None;
    let mut min_dist = f64::INFINITY;
    for candidate in forts {
        if candidate.team == team {
            continue;
        }
        let dist = from.distance_to(&candidate.position);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(candidate);
        }
    }
    nearest
}
