//! Win detection over forts and remaining soldiers.

use hecs::World;

use fortduel_core::components::{Fort, Soldier};
use fortduel_core::enums::Verdict;
use fortduel_core::types::TeamId;

/// Evaluate the terminal condition.
///
/// Exactly one standing fort wins outright. With zero forts standing,
/// the last team with a living soldier wins; if no soldiers remain
/// either, the battle is a stalemate. Pure read of the world, so
/// repeated calls on unchanged state return the same verdict.
pub fn evaluate(world: &World) -> Verdict {
    let mut standing: Option<TeamId> = None;
    let mut standing_count = 0usize;
    {
        let mut query = world.query::<&Fort>();
        for (_entity, fort) in query.iter() {
            if !fort.destroyed {
                standing_count += 1;
                standing = Some(fort.team);
            }
        }
    }

    match (standing_count, standing) {
        (1, Some(team)) => return Verdict::Winner(team),
        (n, _) if n > 1 => return Verdict::Undecided,
        _ => {}
    }

    // No forts left: the last team with living soldiers takes it.
    let mut survivors: Vec<TeamId> = Vec::new();
    {
        let mut query = world.query::<&Soldier>();
        for (_entity, soldier) in query.iter() {
            if !soldier.dead && !survivors.contains(&soldier.team) {
                survivors.push(soldier.team);
            }
        }
    }

    match survivors.as_slice() {
        [] => Verdict::Stalemate,
        [team] => Verdict::Winner(*team),
        _ => Verdict::Undecided,
    }
}
