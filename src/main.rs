//! River Crossing entry point
//!
//! Headless host: plays a few autopilot sessions of each ruleset on the fixed
//! timestep and prints the final snapshot as JSON. Set `RUST_LOG=info` (or
//! `trace` to watch obstacles recycle) for a running commentary.

use std::time::{SystemTime, UNIX_EPOCH};

use river_crossing::consts::TICK_MS;
use river_crossing::host::FixedStep;
use river_crossing::renderer::build_frame;
use river_crossing::sim::autopilot::choose_move;
use river_crossing::{
    GameEvent, Input, Ruleset, RulesetResult, Snapshot, Variant, World, apply_input, tick,
};

/// Sessions to play per ruleset before stopping
const DEMO_SESSIONS: u32 = 3;
/// Hard cap so a perfect autopilot run still terminates (10 simulated minutes)
const MAX_TICKS: u64 = 10 * 60 * 1000 / TICK_MS;
/// The autopilot presses a key at most this often
const TICKS_PER_MOVE: u64 = 3;
/// Host frame time (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;
const FALLBACK_SEED: u64 = 0x5EED;

fn run_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}

fn log_event(variant: Variant, event: &GameEvent) {
    match event {
        GameEvent::Squashed => log::info!("[{}] Squashed by a vehicle", variant.as_str()),
        GameEvent::Drowned => log::info!("[{}] Fell in the river", variant.as_str()),
        GameEvent::Crossed { points } => log::info!("[{}] Crossed (+{})", variant.as_str(), points),
        GameEvent::LevelUp { level } => log::info!("[{}] Level {}", variant.as_str(), level),
        GameEvent::Won { score } => log::info!("[{}] Won with {} points", variant.as_str(), score),
        GameEvent::Restarted => log::info!("[{}] Restarted", variant.as_str()),
    }
}

/// Play `DEMO_SESSIONS` autopilot sessions and return the last frame's snapshot
fn play(variant: Variant, seed: u64) -> RulesetResult<Snapshot> {
    let mut world = World::seeded(Ruleset::for_variant(variant), seed)?;
    let mut clock = FixedStep::default();
    let mut sessions = 0;
    let mut ticks: u64 = 0;

    while sessions < DEMO_SESSIONS && ticks < MAX_TICKS {
        for _ in 0..clock.advance(FRAME_DT) {
            if ticks % TICKS_PER_MOVE == 0 {
                if let Some(direction) = choose_move(&world) {
                    apply_input(&mut world, Input::Move(direction));
                }
            }

            tick(&mut world);
            ticks += 1;
            for event in &world.events {
                log_event(variant, event);
            }

            if world.phase.is_terminal() {
                sessions += 1;
                let hud = world.hud();
                log::info!(
                    "[{}] Session {} ended: score={} level={}",
                    variant.as_str(),
                    sessions,
                    hud.score,
                    hud.level
                );
                if sessions >= DEMO_SESSIONS {
                    break;
                }
                apply_input(&mut world, Input::Restart);
            }
        }
    }

    let snapshot = world.snapshot();
    let frame = build_frame(&snapshot);
    log::debug!(
        "[{}] Final frame: {} triangles, {} bytes",
        variant.as_str(),
        frame.triangle_count(),
        frame.as_bytes().len()
    );
    Ok(snapshot)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("River Crossing (headless) starting...");

    let seed = run_seed();
    log::info!("Seed: {}", seed);

    for variant in [Variant::Simple, Variant::Leveled] {
        let snapshot = play(variant, seed)?;
        println!("{}", serde_json::to_string(&snapshot.hud)?);
    }

    Ok(())
}
