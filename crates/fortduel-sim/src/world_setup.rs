//! Entity spawn factories for setting up the battle world.
//!
//! Creates forts on the arena ring and soldiers around their forts,
//! for both the initial roster and reinforcements.

use std::f64::consts::{FRAC_PI_2, TAU};

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fortduel_core::components::{Fort, SpawnClock, Soldier};
use fortduel_core::config::BattleConfig;
use fortduel_core::constants::*;
use fortduel_core::types::{Position, TeamId};

use crate::systems::reinforcement;

/// Place one fort per team, evenly spaced on a ring around the arena
/// center. The first fort sits at the top (-PI/2).
pub fn spawn_forts(world: &mut World, rng: &mut ChaCha8Rng, config: &BattleConfig) {
    let cx = config.arena_width / 2.0;
    let cy = config.arena_height / 2.0;
    let ring = config.arena_width.min(config.arena_height) * FORT_RING_FACTOR;
    let count = config.teams.len();

    for (i, team) in config.team_ids().enumerate() {
        let angle = -FRAC_PI_2 + (i as f64 / count as f64) * TAU;
        let position = Position::new(cx + angle.cos() * ring, cy + angle.sin() * ring);

        // Stagger the clocks so forts never reinforce in lockstep.
        let clock = SpawnClock {
            timer_ticks: rng.gen_range(0..=(2 * SPAWN_JITTER_TICKS) as u32),
            interval_ticks: reinforcement::next_interval(rng, 0),
        };

        world.spawn((
            Fort {
                team,
                hp: config.fort_hp,
                max_hp: config.fort_hp,
                destroyed: false,
            },
            position,
            clock,
        ));
    }
}

/// Spawn the initial roster: `soldiers_per_team` soldiers per team,
/// scattered around the owning fort.
pub fn muster_soldiers(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    config: &BattleConfig,
) {
    let fort_positions: Vec<(TeamId, Position)> = world
        .query::<(&Fort, &Position)>()
        .iter()
        .map(|(_, (fort, pos))| (fort.team, *pos))
        .collect();

    for (team, fort_pos) in fort_positions {
        for i in 0..config.soldiers_per_team {
            let angle = (i as f64 / config.soldiers_per_team as f64) * TAU;
            let distance = rng.gen::<f64>() * MUSTER_RADIUS;
            let x = fort_pos.x + angle.cos() * distance;
            let y = fort_pos.y + angle.sin() * distance;
            spawn_soldier(world, rng, next_unit_id, team, x, y, config);
        }
    }
}

/// Spawn a reinforcement soldier near a fort: random bearing, random
/// distance within the scatter band.
pub fn spawn_reinforcement(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    team: TeamId,
    fort_pos: &Position,
    config: &BattleConfig,
) -> hecs::Entity {
    let angle = rng.gen_range(0.0..TAU);
    let distance = SPAWN_SCATTER_BASE + rng.gen::<f64>() * SPAWN_SCATTER_SPAN;
    let x = fort_pos.x + angle.cos() * distance;
    let y = fort_pos.y + angle.sin() * distance;
    spawn_soldier(world, rng, next_unit_id, team, x, y, config)
}

/// Spawn a single soldier, clamped inside the arena with a
/// collision-radius margin. The opening cooldown is randomized so
/// volleys stagger instead of firing in unison.
pub fn spawn_soldier(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    team: TeamId,
    x: f64,
    y: f64,
    config: &BattleConfig,
) -> hecs::Entity {
    let unit_id = *next_unit_id;
    *next_unit_id += 1;

    let position = Position::new(
        x.clamp(SOLDIER_RADIUS, config.arena_width - SOLDIER_RADIUS),
        y.clamp(SOLDIER_RADIUS, config.arena_height - SOLDIER_RADIUS),
    );

    world.spawn((
        Soldier {
            unit_id,
            team,
            hp: SOLDIER_MAX_HP,
            max_hp: SOLDIER_MAX_HP,
            cooldown_ticks: rng.gen_range(0..FIRE_COOLDOWN_TICKS),
            target_id: None,
            dead: false,
            fade: 0.0,
        },
        position,
    ))
}
