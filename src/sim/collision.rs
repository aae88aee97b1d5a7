//! Collision and carry resolution
//!
//! Which test applies depends only on the band the player's top edge is in:
//! the road kills on contact, the river kills without a log underneath, and
//! the safe strips never collide.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::Obstacle;
use crate::ruleset::Ruleset;

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// On a safe strip, or on the road with no traffic overlapping
    Clear,
    /// Riding a log; the player drifts by `dx` this tick
    Carried { dx: i32 },
    /// Overlapped a vehicle
    Squashed,
    /// In the river with no log underneath
    Drowned,
}

impl Resolution {
    /// Whether this outcome ends the session
    pub fn is_fatal(&self) -> bool {
        matches!(self, Resolution::Squashed | Resolution::Drowned)
    }
}

/// Resolve the player against both pools.
///
/// Vehicle hits short-circuit. Logs are tested in pool order and the first
/// overlapping one carries the player.
pub fn resolve(rules: &Ruleset, player: &Rect, vehicles: &[Obstacle], logs: &[Obstacle]) -> Resolution {
    let y = player.top();

    if rules.road.contains(y) {
        if vehicles.iter().any(|car| player.intersects(&car.rect)) {
            return Resolution::Squashed;
        }
        return Resolution::Clear;
    }

    if rules.river.contains(y) {
        return match logs.iter().find(|log| player.intersects(&log.rect)) {
            Some(log) => Resolution::Carried { dx: log.speed },
            None => Resolution::Drowned,
        };
    }

    Resolution::Clear
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    fn vehicle(x: i32, y: i32, width: i32, speed: i32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Vehicle,
            rect: Rect::new(x, y, width, 40),
            speed,
        }
    }

    fn log(x: i32, y: i32, width: i32, speed: i32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Log,
            rect: Rect::new(x, y, width, 40),
            speed,
        }
    }

    #[test]
    fn test_vehicle_overlap_squashes() {
        let rules = Ruleset::simple();
        let player = Rect::new(375, 400, 50, 50);
        let cars = [vehicle(300, 420, 100, 3)];
        assert_eq!(resolve(&rules, &player, &cars, &[]), Resolution::Squashed);
    }

    #[test]
    fn test_edge_adjacent_vehicle_is_safe() {
        let rules = Ruleset::simple();
        let player = Rect::new(375, 400, 50, 50);
        // Vehicle's right edge touches the player's left edge
        let beside = vehicle(275, 400, 100, 3);
        // Vehicle's top edge touches the player's bottom edge
        let below = vehicle(375, 450, 100, -3);
        let result = resolve(&rules, &player, &[beside, below], &[]);
        assert_eq!(result, Resolution::Clear);
        assert!(!result.is_fatal());
    }

    #[test]
    fn test_log_carries_by_its_speed() {
        let rules = Ruleset::simple();
        let player = Rect::new(375, 100, 50, 50);
        let logs = [log(0, 100, 100, 2), log(350, 110, 200, -4)];
        assert_eq!(resolve(&rules, &player, &[], &logs), Resolution::Carried { dx: -4 });
    }

    #[test]
    fn test_first_overlapping_log_wins() {
        let rules = Ruleset::leveled();
        let player = Rect::new(100, 100, 30, 30);
        let logs = [log(50, 100, 150, 6), log(80, 110, 150, -2)];
        assert_eq!(resolve(&rules, &player, &[], &logs), Resolution::Carried { dx: 6 });
    }

    #[test]
    fn test_river_without_log_drowns() {
        let rules = Ruleset::simple();
        let player = Rect::new(375, 200, 50, 50);
        let logs = [log(0, 50, 150, 1)];
        let result = resolve(&rules, &player, &[], &logs);
        assert_eq!(result, Resolution::Drowned);
        assert!(result.is_fatal());
    }

    #[test]
    fn test_safe_strips_never_collide() {
        let rules = Ruleset::leveled();
        // Median strip, with a (misplaced) vehicle right on top of the player
        let player = Rect::new(100, 210, 30, 30);
        let cars = [vehicle(90, 205, 100, 2)];
        assert_eq!(resolve(&rules, &player, &cars, &[]), Resolution::Clear);

        // Goal strip: no log needed
        let player = Rect::new(100, 10, 30, 30);
        assert_eq!(resolve(&rules, &player, &[], &[]), Resolution::Clear);
    }

    #[test]
    fn test_vehicles_ignored_in_river() {
        let rules = Ruleset::simple();
        let player = Rect::new(375, 100, 50, 50);
        let cars = [vehicle(350, 100, 100, 2)];
        let logs = [log(300, 100, 200, 1)];
        assert_eq!(resolve(&rules, &player, &cars, &logs), Resolution::Carried { dx: 1 });
    }
}
