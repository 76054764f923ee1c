//! Reinforcement scheduler: per-fort decaying spawn clocks.
//!
//! Each standing fort owns an independent clock. When a clock fires,
//! the fort spawns one soldier and recomputes its interval from the
//! decay curve plus uniform jitter, so reinforcement waves accelerate
//! and desynchronize as the battle drags on. Destroyed forts are
//! skipped entirely and never spawn again.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fortduel_core::components::{Fort, SpawnClock};
use fortduel_core::config::BattleConfig;
use fortduel_core::constants::{SPAWN_INTERVAL_MIN, SPAWN_JITTER_TICKS};
use fortduel_core::events::BattleEvent;
use fortduel_core::types::{Position, TeamId};

use crate::difficulty;
use crate::world_setup;

/// Advance every standing fort's clock and spawn due reinforcements.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    current_tick: u64,
    next_unit_id: &mut u32,
    config: &BattleConfig,
    events: &mut Vec<BattleEvent>,
) {
    let mut due: Vec<(TeamId, Position)> = Vec::new();

    for (_entity, (fort, pos, clock)) in world.query_mut::<(&Fort, &Position, &mut SpawnClock)>() {
        if fort.destroyed {
            continue;
        }
        clock.timer_ticks += 1;
        if clock.timer_ticks >= clock.interval_ticks {
            clock.timer_ticks = 0;
            clock.interval_ticks = next_interval(rng, current_tick);
            due.push((fort.team, *pos));
        }
    }

    for (team, fort_pos) in due {
        world_setup::spawn_reinforcement(world, rng, next_unit_id, team, &fort_pos, config);
        events.push(BattleEvent::Reinforcements { team });
        tracing::debug!(team = team.0, tick = current_tick, "reinforcement spawned");
    }
}

/// Next spawn interval: decay curve plus jitter, floored at the hard
/// minimum.
pub fn next_interval(rng: &mut ChaCha8Rng, current_tick: u64) -> u32 {
    let jitter = rng.gen_range(-SPAWN_JITTER_TICKS..SPAWN_JITTER_TICKS) as f64;
    let interval = difficulty::spawn_interval_base(current_tick) + jitter;
    interval.max(SPAWN_INTERVAL_MIN as f64) as u32
}
