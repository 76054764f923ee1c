//! Cleanup system: death fades and removal of expired entities.
//!
//! Dead soldiers fade out before removal; removal is a pure filter, not
//! triggered at the moment of death. Uses a pre-allocated buffer to
//! avoid per-tick allocation.

use hecs::{Entity, World};

use fortduel_core::components::{Projectile, Soldier};
use fortduel_core::constants::DEATH_FADE_STEP;

/// Advance death fades and despawn fully-faded soldiers and inactive
/// projectiles.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, soldier) in world.query_mut::<&mut Soldier>() {
        if !soldier.dead {
            continue;
        }
        soldier.fade = (soldier.fade - DEATH_FADE_STEP).max(0.0);
        if soldier.fade <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.active {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
