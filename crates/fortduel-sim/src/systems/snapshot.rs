//! Snapshot system: queries the world and builds a complete
//! BattleSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use fortduel_core::components::{Fort, Projectile, Soldier};
use fortduel_core::config::BattleConfig;
use fortduel_core::enums::BattlePhase;
use fortduel_core::events::BattleEvent;
use fortduel_core::state::*;
use fortduel_core::types::{Position, SimTime, TeamId};

/// Build a complete BattleSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: BattlePhase,
    config: &BattleConfig,
    eliminated: &[TeamId],
    winner: Option<TeamId>,
    stalemate: bool,
    events: Vec<BattleEvent>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        phase,
        soldiers: build_soldiers(world),
        projectiles: build_projectiles(world),
        forts: build_forts(world),
        teams: build_teams(world, config, eliminated),
        eliminated: eliminated.to_vec(),
        winner,
        stalemate,
        events,
    }
}

/// Soldier views sorted by unit id for a stable wire order.
fn build_soldiers(world: &World) -> Vec<SoldierView> {
    let mut soldiers: Vec<SoldierView> = world
        .query::<(&Soldier, &Position)>()
        .iter()
        .map(|(_, (soldier, pos))| SoldierView {
            unit_id: soldier.unit_id,
            team: soldier.team,
            position: *pos,
            hp: soldier.hp,
            max_hp: soldier.max_hp,
            dead: soldier.dead,
            fade: soldier.fade,
        })
        .collect();

    soldiers.sort_by_key(|s| s.unit_id);
    soldiers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.active)
        .map(|(_, (projectile, pos))| ProjectileView {
            unit_id: projectile.unit_id,
            team: projectile.team,
            position: *pos,
        })
        .collect();

    projectiles.sort_by_key(|p| p.unit_id);
    projectiles
}

fn build_forts(world: &World) -> Vec<FortView> {
    let mut forts: Vec<FortView> = world
        .query::<(&Fort, &Position)>()
        .iter()
        .map(|(_, (fort, pos))| FortView {
            team: fort.team,
            position: *pos,
            hp: fort.hp,
            max_hp: fort.max_hp,
            destroyed: fort.destroyed,
        })
        .collect();

    forts.sort_by_key(|f| f.team);
    forts
}

/// Per-team status lines: living counts plus the eliminated flag.
fn build_teams(world: &World, config: &BattleConfig, eliminated: &[TeamId]) -> Vec<TeamStatus> {
    let mut alive = vec![0u32; config.teams.len()];
    {
        let mut query = world.query::<&Soldier>();
        for (_entity, soldier) in query.iter() {
            if !soldier.dead {
                if let Some(count) = alive.get_mut(soldier.team.0 as usize) {
                    *count += 1;
                }
            }
        }
    }

    config
        .teams
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let team = TeamId(i as u8);
            TeamStatus {
                team,
                name: spec.name.clone(),
                color: spec.color.clone(),
                alive: alive[i],
                eliminated: eliminated.contains(&team),
            }
        })
        .collect()
}
