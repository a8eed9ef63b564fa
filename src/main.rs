//! Flappy Gates entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs one headless session flown by the autopilot and
//! prints the result.

/// Simulated seconds before the headless run gives up
#[cfg(not(target_arch = "wasm32"))]
const MAX_SESSION_SECS: f32 = 120.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_gates::consts::SIM_DT;
    use flappy_gates::persistence::FileStore;
    use flappy_gates::sim::{GameEvent, autopilot};
    use flappy_gates::{Game, GameConfig, Screen, platform};

    env_logger::init();
    log::info!("Flappy Gates (native) starting...");

    // `flappy-gates easy debug` reads like `?easy&debug`
    let query = std::env::args().skip(1).collect::<Vec<_>>().join("&");
    let config = match GameConfig::from_query(&query) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let path = std::env::var("FLAPPY_HIGHSCORE_PATH")
        .unwrap_or_else(|_| "flappy-highscore.json".to_string());
    let store = FileStore::new(path);

    let mut game = match Game::new(config, store, platform::entropy_seed()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to create game: {}", e);
            std::process::exit(2);
        }
    };

    game.primary_action();
    let mut elapsed = 0.0;
    while game.screen() == Screen::Playing && elapsed < MAX_SESSION_SECS {
        if autopilot::wants_flap(game.world(), game.config()) {
            game.primary_action();
        }
        game.advance(SIM_DT);
        elapsed += SIM_DT;
    }

    let ended = game.drain_events().into_iter().find_map(|e| match e {
        GameEvent::SessionEnded {
            medal,
            cause,
            new_high_score,
            ..
        } => Some((medal, cause, new_high_score)),
        _ => None,
    });

    println!("\nSession summary");
    println!("  seed:       {}", game.world().seed());
    println!("  time:       {:.1}s", game.world().time);
    println!("  score:      {}", game.score());
    println!("  high score: {}", game.high_score());
    match ended {
        Some((medal, cause, new_high_score)) => {
            println!("  ended by:   {:?}", cause);
            println!(
                "  medal:      {}",
                medal.map(|m| m.as_str()).unwrap_or("none")
            );
            if new_high_score {
                println!("  new high score!");
            }
        }
        None => println!("  still flying after {:.0}s", MAX_SESSION_SECS),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
