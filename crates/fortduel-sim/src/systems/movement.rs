//! Movement policy: stochastic wander blended with goal-seeking.
//!
//! The wander/seek blend produces chaotic, non-robotic troop movement
//! while still converging combat toward the living front. Most ticks
//! are non-goal-directed by design.

use std::f64::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fortduel_core::components::Soldier;
use fortduel_core::config::BattleConfig;
use fortduel_core::constants::*;
use fortduel_core::types::Position;

use crate::difficulty;
use crate::systems::targeting;

/// Move every living soldier for one tick, then clamp to arena bounds.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, current_tick: u64, config: &BattleConfig) {
    let soldiers = targeting::collect_living_soldiers(world);
    let forts = targeting::collect_standing_forts(world);
    let seek_speed = SEEK_SPEED * difficulty::movement_multiplier(current_tick);

    for (_entity, (soldier, pos)) in world.query_mut::<(&mut Soldier, &mut Position)>() {
        if soldier.dead {
            continue;
        }

        let enemy = targeting::nearest_enemy_soldier(soldier.team, pos, &soldiers);
        soldier.target_id = enemy.map(|e| e.unit_id);

        if rng.gen::<f64>() < WANDER_CHANCE {
            let angle = rng.gen_range(0.0..TAU);
            pos.x += angle.cos() * WANDER_SPEED;
            pos.y += angle.sin() * WANDER_SPEED;
        } else if let Some(enemy) = enemy {
            step_toward(pos, &enemy.position, seek_speed);
        } else if let Some(fort) = targeting::nearest_enemy_fort(soldier.team, pos, &forts) {
            step_toward(pos, &fort.position, seek_speed);
        }
        // No enemy soldier and no enemy fort: stand fast.

        pos.x = pos.x.clamp(SOLDIER_RADIUS, config.arena_width - SOLDIER_RADIUS);
        pos.y = pos.y.clamp(SOLDIER_RADIUS, config.arena_height - SOLDIER_RADIUS);
    }
}

/// Step toward the goal, holding position once inside half firing range
/// so soldiers do not overshoot into their target.
fn step_toward(pos: &mut Position, goal: &Position, speed: f64) {
    let dx = goal.x - pos.x;
    let dy = goal.y - pos.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > HOLD_OFF_RANGE {
        pos.x += dx / dist * speed;
        pos.y += dy / dist * speed;
    }
}
