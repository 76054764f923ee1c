//! Combat resolution: cooldown-gated firing and projectile flight.
//!
//! Firing and impact resolution are separate passes: `run_firing`
//! spawns projectiles for soldiers whose cooldown expired, then
//! `run_projectiles` advances every projectile and resolves at most
//! one impact each.

use hecs::{Entity, World};

use fortduel_core::components::{Fort, Projectile, Soldier};
use fortduel_core::config::BattleConfig;
use fortduel_core::constants::*;
use fortduel_core::events::BattleEvent;
use fortduel_core::types::{Position, TeamId, Velocity};

use crate::difficulty;
use crate::systems::targeting;

/// Firing decisions for one tick.
///
/// While the cooldown is positive it decrements and the soldier holds
/// fire. At zero, the soldier shoots the nearest enemy soldier within
/// range, else the nearest enemy fort within range; range is boundary
/// inclusive. One shot per soldier per tick.
pub fn run_firing(world: &mut World, current_tick: u64, next_unit_id: &mut u32) {
    let soldiers = targeting::collect_living_soldiers(world);
    let forts = targeting::collect_standing_forts(world);
    let cooldown =
        (FIRE_COOLDOWN_TICKS as f64 / difficulty::attack_multiplier(current_tick)).round() as u32;

    // (shooter id, team, muzzle, aim point)
    let mut volleys: Vec<(u32, TeamId, Position, Position)> = Vec::new();

    for (_entity, (soldier, pos)) in world.query_mut::<(&mut Soldier, &Position)>() {
        if soldier.dead {
            continue;
        }
        if soldier.cooldown_ticks > 0 {
            soldier.cooldown_ticks -= 1;
            continue;
        }

        if let Some(enemy) = targeting::nearest_enemy_soldier(soldier.team, pos, &soldiers) {
            soldier.target_id = Some(enemy.unit_id);
            if pos.distance_to(&enemy.position) <= FIRE_RANGE {
                volleys.push((soldier.unit_id, soldier.team, *pos, enemy.position));
                soldier.cooldown_ticks = cooldown;
                continue;
            }
        }

        if let Some(fort) = targeting::nearest_enemy_fort(soldier.team, pos, &forts) {
            if pos.distance_to(&fort.position) <= FIRE_RANGE {
                volleys.push((soldier.unit_id, soldier.team, *pos, fort.position));
                soldier.cooldown_ticks = cooldown;
            }
        }
        // Nothing in range: cooldown stays 0, re-attempt next tick.
    }

    for (shooter_id, team, muzzle, aim) in volleys {
        let unit_id = *next_unit_id;
        *next_unit_id += 1;
        world.spawn((
            Projectile {
                unit_id,
                shooter_id,
                team,
                active: true,
            },
            muzzle,
            Velocity::toward(&muzzle, &aim, PROJECTILE_SPEED),
        ));
    }
}

/// Advance every active projectile and resolve impacts.
///
/// A projectile deactivates on leaving the arena (no effect), on
/// striking an enemy soldier (hp - 1), or on striking an enemy fort
/// (hp - 1, clamped at 0). A soldier hit suppresses the fort test.
/// Projectiles are resolved one at a time so earlier kills are visible
/// to later projectiles within the same tick.
pub fn run_projectiles(world: &mut World, config: &BattleConfig, events: &mut Vec<BattleEvent>) {
    // Advance and cull at the arena edge.
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        if !projectile.active {
            continue;
        }
        pos.x += vel.x;
        pos.y += vel.y;
        if pos.x < 0.0 || pos.x > config.arena_width || pos.y < 0.0 || pos.y > config.arena_height
        {
            projectile.active = false;
        }
    }

    let in_flight: Vec<(Entity, TeamId, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.active)
        .map(|(entity, (projectile, pos))| (entity, projectile.team, *pos))
        .collect();

    for (entity, team, pos) in in_flight {
        let mut spent = false;

        // Friendly fire is impossible by construction: the team check
        // skips every same-team candidate, the shooter included.
        for (_e, (soldier, soldier_pos)) in world.query_mut::<(&mut Soldier, &Position)>() {
            if soldier.team == team || soldier.dead {
                continue;
            }
            if pos.distance_to(soldier_pos) < SOLDIER_RADIUS + PROJECTILE_RADIUS {
                soldier.hp -= 1;
                if soldier.hp <= 0 {
                    soldier.hp = 0;
                    soldier.dead = true;
                    soldier.fade = 1.0;
                    events.push(BattleEvent::SoldierDown { team: soldier.team });
                }
                spent = true;
                break;
            }
        }

        if !spent {
            for (_e, (fort, fort_pos)) in world.query_mut::<(&mut Fort, &Position)>() {
                if fort.team == team || fort.destroyed {
                    continue;
                }
                if pos.distance_to(fort_pos) < FORT_RADIUS + PROJECTILE_RADIUS {
                    fort.hp -= 1;
                    if fort.hp <= 0 {
                        fort.hp = 0;
                        fort.destroyed = true;
                    }
                    spent = true;
                    break;
                }
            }
        }

        if spent {
            if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
                projectile.active = false;
            }
        }
    }
}
