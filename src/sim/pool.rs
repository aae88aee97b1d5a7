//! Obstacle spawning and recycling
//!
//! Pools never shrink: an obstacle that drives off the far edge is replaced
//! in place by a fresh one of the same kind entering from an edge.

use super::geometry::Rect;
use super::random::{RandomSource, coin, draw_below};
use super::state::{Obstacle, ObstacleKind};
use crate::ruleset::Ruleset;

/// Create one obstacle with a random lane, width, speed and entry edge.
///
/// Positive speeds enter fully off-screen on the left, negative speeds fully
/// off-screen on the right.
pub fn spawn<R: RandomSource + ?Sized>(
    rules: &Ruleset,
    kind: ObstacleKind,
    level: u32,
    rng: &mut R,
) -> Obstacle {
    let band = rules.band_for(kind);
    let table = rules.spawn_table(kind);

    let y = band.top + draw_below(rng, band.height() - rules.obstacle_height);
    let width = (table.width_min + draw_below(rng, table.width_span)) * rules.player_size;
    let base_speed = i32::try_from(level).unwrap_or(i32::MAX).max(1);
    let speed = (base_speed + draw_below(rng, table.speed_span)) * rules.speed_multiplier;

    let (x, speed) = if coin(rng) {
        (-width, speed)
    } else {
        (rules.panel_width, -speed)
    };

    Obstacle {
        kind,
        rect: Rect::new(x, y, width, rules.obstacle_height),
        speed,
    }
}

/// Move every obstacle one tick, recycling those that left the playfield.
///
/// Returns how many were recycled; the pool length never changes.
pub fn advance<R: RandomSource + ?Sized>(
    pool: &mut [Obstacle],
    rules: &Ruleset,
    level: u32,
    rng: &mut R,
) -> usize {
    let mut recycled = 0;
    for obstacle in pool.iter_mut() {
        obstacle.advance();
        if !obstacle.has_exited(rules.panel_width) {
            continue;
        }

        let kind = obstacle.kind;
        debug_assert!(
            rules.band_for(kind).contains(obstacle.rect.top()),
            "{} left its lane at y={}",
            kind.as_str(),
            obstacle.rect.top()
        );
        *obstacle = spawn(rules, kind, level, rng);
        recycled += 1;
        log::trace!(
            "Recycled {} into lane y={} speed={}",
            kind.as_str(),
            obstacle.rect.top(),
            obstacle.speed
        );
    }
    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_rightward_enters_left_edge() {
        let rules = Ruleset::simple();
        // lane, width, speed, direction
        let mut rng = ScriptedSource::new([0.0, 0.0, 0.0, 0.1]);
        let car = spawn(&rules, ObstacleKind::Vehicle, 1, &mut rng);
        assert_eq!(car.kind, ObstacleKind::Vehicle);
        assert_eq!(car.rect, Rect::new(-100, 300, 100, 40));
        assert_eq!(car.speed, 1);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_spawn_leftward_enters_right_edge() {
        let rules = Ruleset::simple();
        let mut rng = ScriptedSource::new([0.999, 0.999, 0.999, 0.9]);
        let log = spawn(&rules, ObstacleKind::Log, 1, &mut rng);
        // Lowest lane still fits inside the river
        assert_eq!(log.rect.top(), 209);
        assert!(log.rect.bottom() <= rules.river.bottom);
        assert_eq!(log.rect.left(), 800);
        assert_eq!(log.rect.size.x, 4 * 50);
        assert_eq!(log.speed, -2);
    }

    #[test]
    fn test_spawn_speed_scales_with_level() {
        let rules = Ruleset::leveled();
        let mut rng = ScriptedSource::new([0.5, 0.5, 0.0, 0.1]);
        let car = spawn(&rules, ObstacleKind::Vehicle, 4, &mut rng);
        assert_eq!(car.speed, 4 * 2);
        let log = spawn(&rules, ObstacleKind::Log, 4, &mut rng);
        assert_eq!(log.rect.size.x, 6 * 30);
    }

    #[test]
    fn test_rightward_vehicle_recycled_after_crossing() {
        let rules = Ruleset::simple();
        let mut rng = ScriptedSource::new([0.0, 0.0, 0.0, 0.1]);
        let car = spawn(&rules, ObstacleKind::Vehicle, 1, &mut rng);
        let width = car.rect.size.x;
        let mut pool = vec![car];

        // Travel until the left edge passes the right side of the panel
        let ticks_needed = (width + rules.panel_width + 1) / car.speed;
        let mut recycled = 0;
        for _ in 0..ticks_needed {
            recycled += advance(&mut pool, &rules, 1, &mut rng);
        }

        assert_eq!(recycled, 1);
        assert_eq!(pool.len(), 1);
        let fresh = pool[0];
        assert_eq!(fresh.kind, ObstacleKind::Vehicle);
        let off_left = fresh.rect.right() <= 0;
        let off_right = fresh.rect.left() >= rules.panel_width;
        assert!(off_left || off_right);
    }

    #[test]
    fn test_recycle_keeps_kind() {
        let rules = Ruleset::leveled();
        let mut rng = ScriptedSource::new([0.3, 0.6, 0.2, 0.7]);
        let mut pool = vec![Obstacle {
            kind: ObstacleKind::Log,
            rect: Rect::new(-179, 60, 180, 40),
            speed: -2,
        }];
        assert_eq!(advance(&mut pool, &rules, 1, &mut rng), 1);
        assert_eq!(pool[0].kind, ObstacleKind::Log);
        assert!(rules.river.contains(pool[0].rect.top()));
    }

    proptest! {
        #[test]
        fn prop_spawns_stay_in_their_band(seed in any::<u64>(), level in 1..=5u32) {
            let rules = Ruleset::leveled();
            let mut rng = Pcg32::seed_from_u64(seed);
            for kind in [ObstacleKind::Vehicle, ObstacleKind::Log] {
                let band = rules.band_for(kind);
                let o = spawn(&rules, kind, level, &mut rng);
                prop_assert!(o.rect.top() >= band.top);
                prop_assert!(o.rect.bottom() <= band.bottom);
                prop_assert!(o.rect.size.x > 0);
                prop_assert!(o.speed != 0);
                let off_left = o.speed > 0 && o.rect.right() == 0;
                let off_right = o.speed < 0 && o.rect.left() == rules.panel_width;
                prop_assert!(off_left || off_right);
            }
        }

        #[test]
        fn prop_advance_preserves_pool_size(seed in any::<u64>(), ticks in 1..600usize) {
            let rules = Ruleset::simple();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool: Vec<Obstacle> = (0..6)
                .map(|_| spawn(&rules, ObstacleKind::Vehicle, 1, &mut rng))
                .collect();
            for _ in 0..ticks {
                advance(&mut pool, &rules, 1, &mut rng);
                prop_assert_eq!(pool.len(), 6);
            }
            prop_assert!(pool.iter().all(|o| o.kind == ObstacleKind::Vehicle));
        }
    }
}
