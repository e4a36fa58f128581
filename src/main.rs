//! Witch Scroller entry point
//!
//! Loads settings and the level, then runs the game loop on its own thread.
//! Without a window layer attached, the main thread stands in for the
//! render thread and logs what it would draw.
//!
//! Usage: `witch-scroller [level.json] [settings.json]`

use std::time::Duration;

use witch_scroller::consts::PLAYER_SHEET_SIZE;
use witch_scroller::renderer::scene_vertices;
use witch_scroller::sim::{Level, SimulationState, StripOrientation};
use witch_scroller::{GameLoop, Settings, SharedSnapshot};

const DEFAULT_LEVEL_PATH: &str = "assets/level.json";
const DEFAULT_SETTINGS_PATH: &str = "assets/settings.json";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Witch Scroller starting...");

    let mut args = std::env::args().skip(1);
    let level_path = args.next().unwrap_or_else(|| DEFAULT_LEVEL_PATH.to_string());
    let settings_path = args.next().unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());

    let settings = Settings::load_or_default(&settings_path);
    let level = Level::load_or_empty(&level_path);
    let state = SimulationState::new(&settings, PLAYER_SHEET_SIZE, StripOrientation::Vertical);

    let shared = SharedSnapshot::new();
    let handle = match GameLoop::spawn(state, level, settings, Box::new(shared.clone())) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("Failed to start game loop thread: {}", e);
            return;
        }
    };

    // Exit is by process termination; this only returns if the loop thread dies
    while !handle.thread.is_finished() {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = shared.latest() {
            log::info!(
                "tick {}: player at ({:.0}, {:.0}) frame {}, {} vertices, layer 0 offset {:.1}",
                snapshot.tick,
                snapshot.player.bounds.x,
                snapshot.player.bounds.y,
                snapshot.player.frame_index,
                scene_vertices(&snapshot).len(),
                snapshot.layers[0].offset
            );
        }
    }
    log::error!("Game loop thread exited");
}
