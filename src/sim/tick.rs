//! Fixed timestep simulation tick
//!
//! One tick: move both pools, resolve collisions, then check for a crossing.
//! Ticks in a terminal phase do nothing until the host sends a restart.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Resolution, resolve};
use super::pool;
use super::random::RandomSource;
use super::state::{GameEvent, GamePhase, ObstacleKind, World};
use crate::ruleset::Progression;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Terminal phase; nothing was simulated
    Halted,
    /// Obstacles moved, nothing else happened
    Continued,
    /// The player was squashed or drowned
    GameOver,
    /// Endless crossing scored
    Crossed,
    /// Leveled crossing advanced the level
    LevelUp,
    /// Final level crossed
    Won,
}

/// Advance the world by one fixed timestep
pub fn tick<R: RandomSource>(world: &mut World<R>) -> TickOutcome {
    world.events.clear();

    if world.phase.is_terminal() {
        return TickOutcome::Halted;
    }

    world.time_ticks += 1;

    let level = world.level;
    pool::advance(&mut world.vehicles, &world.ruleset, level, &mut world.rng);
    pool::advance(&mut world.logs, &world.ruleset, level, &mut world.rng);

    match resolve(
        &world.ruleset,
        &world.player.rect,
        &world.vehicles,
        &world.logs,
    ) {
        Resolution::Squashed => return end_session(world, GameEvent::Squashed),
        Resolution::Drowned => return end_session(world, GameEvent::Drowned),
        Resolution::Carried { dx } => world.player.shift(IVec2::new(dx, 0)),
        Resolution::Clear => {}
    }

    check_progress(world)
}

fn end_session<R>(world: &mut World<R>, cause: GameEvent) -> TickOutcome {
    world.phase = GamePhase::GameOver;
    world.events.push(cause);
    log::info!(
        "Game over ({:?}) at tick {}: score={} level={}",
        cause,
        world.time_ticks,
        world.score,
        world.level
    );
    TickOutcome::GameOver
}

/// Score a crossing once the player is above the goal line
pub fn check_progress<R: RandomSource>(world: &mut World<R>) -> TickOutcome {
    if world.player.rect.top() >= world.ruleset.goal_height {
        return TickOutcome::Continued;
    }

    match world.ruleset.progression {
        Progression::Endless {
            points_per_crossing,
        } => {
            world.score += points_per_crossing;
            world.events.push(GameEvent::Crossed {
                points: points_per_crossing,
            });
            world.reset_player();
            log::debug!("Crossed, score={}", world.score);
            TickOutcome::Crossed
        }
        Progression::Leveled {
            total_levels,
            points_per_level,
        } => {
            let points = u64::from(world.level) * points_per_level;
            world.score += points;
            world.events.push(GameEvent::Crossed { points });

            if world.level >= total_levels {
                world.phase = GamePhase::GameWon;
                world.events.push(GameEvent::Won { score: world.score });
                log::info!("All {} levels cleared, final score {}", total_levels, world.score);
                return TickOutcome::Won;
            }

            world.level += 1;
            world.reset_player();
            increase_difficulty(world);
            world.events.push(GameEvent::LevelUp { level: world.level });
            log::info!(
                "Level {}: {} vehicles, {} logs",
                world.level,
                world.vehicles.len(),
                world.logs.len()
            );
            TickOutcome::LevelUp
        }
    }
}

/// Permanently add `level` vehicles and `level` logs
fn increase_difficulty<R: RandomSource>(world: &mut World<R>) {
    for _ in 0..world.level {
        world.spawn_obstacle(ObstacleKind::Vehicle);
        world.spawn_obstacle(ObstacleKind::Log);
    }
}
