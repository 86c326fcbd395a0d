//! Headless demo: spawns a few balls, runs the world for a while and logs
//! where everything ends up. Run with `RUST_LOG=debug` to watch explosions.
//!
//! Usage: `bouncing-balls [settings.json]`

use bouncing_balls::{Settings, World};
use rand::Rng;

fn main() {
    env_logger::init();
    log::info!("Bouncing Balls (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    if let Err(e) = run(&settings) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> bouncing_balls::Result<()> {
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    let mut world = World::new(settings, seed);

    for i in 0..settings.initial_balls {
        let color = settings
            .palette
            .get(i % settings.palette.len().max(1))
            .cloned()
            .unwrap_or_else(|| "white".to_string());
        world.spawn(color, settings.ball_radius)?;
    }

    for t in 1..=settings.ticks {
        world.tick();
        if settings.explode_every > 0 && t % settings.explode_every == 0 {
            match world.explode_largest() {
                Some(count) => log::info!("Tick {}: explosion, {} balls", t, count),
                None => log::debug!("Tick {}: nothing large enough to explode", t),
            }
        }
    }

    log::info!(
        "Finished {} ticks with {} balls (seed {})",
        world.ticks(),
        world.len(),
        seed
    );
    for (i, view) in world.views().enumerate() {
        println!(
            "{:>4}  {:<8} r={:<6.2} x={:>8.2} y={:>8.2}",
            i, view.color, view.radius, view.position.x, view.position.y
        );
    }
    Ok(())
}
