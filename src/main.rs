//! Wrap Snake entry point
//!
//! Headless host: owns the engine, runs the fixed-interval loop and feeds it
//! directions read from stdin (or the autopilot), then prints the final board
//! as JSON.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::BufRead;
    use std::path::PathBuf;
    use std::sync::mpsc;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use wrap_snake::sim::choose_direction;
    use wrap_snake::{Direction, Settings, SnakeEngine, TickOutcome};

    env_logger::init();
    log::info!("Wrap Snake (native) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(|p| Settings::load(&PathBuf::from(p)))
        .unwrap_or_default()
        .sanitized();

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut engine = SnakeEngine::new(&settings, seed);
    let interval = Duration::from_millis(settings.tick_interval_ms);

    // Input arrives on its own thread; only this loop touches the engine
    let (tx, rx) = mpsc::channel::<Direction>();
    if !settings.autopilot {
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                for key in line.split_whitespace() {
                    match Direction::from_key(key) {
                        Some(d) => {
                            if tx.send(d).is_err() {
                                return;
                            }
                        }
                        None => log::debug!("Ignoring key {:?}", key),
                    }
                }
            }
        });
    } else {
        drop(tx);
        log::info!("Autopilot enabled");
    }

    loop {
        // Only the last request before a tick takes effect
        for d in rx.try_iter() {
            engine.set_direction(d);
        }
        if settings.autopilot {
            let d = choose_direction(engine.grid(), engine.state());
            engine.set_direction(d);
        }

        match engine.tick() {
            TickOutcome::Died | TickOutcome::Idle => break,
            TickOutcome::Ate | TickOutcome::Moved => {}
        }

        let ticks = engine.state().time_ticks();
        log::debug!("tick {} head {:?}", ticks, engine.state().head());
        if settings.max_ticks > 0 && ticks >= settings.max_ticks {
            log::info!("Reached max_ticks ({})", settings.max_ticks);
            break;
        }

        std::thread::sleep(interval);
    }

    let snapshot = engine.snapshot();
    log::info!(
        "Finished: length {}, {} ticks, game over: {}",
        snapshot.length,
        snapshot.ticks,
        snapshot.is_game_over
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final board: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No host loop on wasm32; embedders drive SnakeEngine directly
}
