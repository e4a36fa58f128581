//! Witch Scroller - A side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Per-tick simulation (animation, physics, collisions, parallax)
//! - `game_loop`: Fixed-tick driver thread with input and render handoff
//! - `renderer`: Snapshot to vertex conversion
//! - `settings`: Data-driven tuning loaded from JSON

pub mod game_loop;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, LoopHandle, RenderSink, SharedSnapshot};
pub use settings::Settings;

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Tick interval in milliseconds (~60 ticks per second)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Default window size
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Gravity added to vertical velocity every tick
    pub const GRAVITY: f32 = 1.0;
    /// Horizontal speed while a movement key is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Upward velocity applied by a grounded jump
    pub const JUMP_VELOCITY: f32 = -25.0;
    /// Downward velocity while the down key is held
    pub const DOWN_VELOCITY: f32 = 10.0;

    /// Nudge applied when the player crosses the left/right edge
    pub const EDGE_NUDGE_X: f32 = 5.0;
    /// Nudge applied when the player crosses the top edge
    pub const EDGE_NUDGE_Y: f32 = 10.0;

    /// Band below a platform top inside which a falling player lands
    pub const LANDING_TOLERANCE: f32 = 40.0;
    /// Horizontal knockback on obstacle contact
    pub const OBSTACLE_KNOCKBACK: f32 = 100.0;
    /// Horizontal push on wall contact
    pub const WALL_NUDGE: f32 = 5.0;
    /// Wall rect thickness
    pub const WALL_THICKNESS: f32 = 10.0;
    /// Vertical inset of a wall below its platform top
    pub const WALL_INSET: f32 = 50.0;

    /// Parallax accumulator decrement per tick
    pub const SCROLL_STEP: f32 = 0.1;
    /// Number of background layers
    pub const LAYER_COUNT: usize = 4;
    /// Layer speed multipliers, far to near
    pub const LAYER_SPEEDS: [f32; LAYER_COUNT] = [1.0, 2.0, 3.0, 4.0];

    /// Ticks per animation frame
    pub const ANIMATION_THRESHOLD: u32 = 10;

    /// Player spawn and sprite layout
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;
    pub const PLAYER_FRAME_WIDTH: u32 = 32;
    pub const PLAYER_FRAME_HEIGHT: u32 = 48;
    pub const PLAYER_SCALE: f32 = 3.0;
    /// Pixel size of the bundled idle sheet (vertical strip of 6 frames)
    pub const PLAYER_SHEET_SIZE: (u32, u32) = (32, 288);
}
