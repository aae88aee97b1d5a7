//! Idle/demo mode - picks the player's next move
//!
//! Looks one tick ahead: obstacles are tested where they will be after the
//! next advance, the same way the resolver will see them.

use super::geometry::Rect;
use super::input::{Direction, move_target};
use super::state::World;

/// Preferred move for this tick, or `None` to stay put
pub fn choose_move<R>(world: &World<R>) -> Option<Direction> {
    if world.phase.is_terminal() {
        return None;
    }

    let safe_move = |direction: Direction| {
        move_target(world, direction).filter(|target| is_safe(world, target))
    };

    // Always push forward when the next row is safe
    if safe_move(Direction::Up).is_some() {
        return Some(Direction::Up);
    }

    if is_safe(world, &world.player.rect) {
        return None;
    }

    // Staying is fatal: dodge sideways, then back
    [Direction::Left, Direction::Right, Direction::Down]
        .into_iter()
        .find(|&direction| safe_move(direction).is_some())
        .or(Some(Direction::Up))
}

/// Whether standing at `spot` survives the next tick
fn is_safe<R>(world: &World<R>, spot: &Rect) -> bool {
    let rules = &world.ruleset;
    let y = spot.top();

    if y < rules.goal_height {
        return true;
    }
    if rules.road.contains(y) {
        return !world
            .vehicles
            .iter()
            .any(|car| spot.intersects(&car.next_rect()));
    }
    if rules.river.contains(y) {
        return world.logs.iter().any(|log| spot.intersects(&log.next_rect()));
    }
    true
}
