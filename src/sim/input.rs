//! Keyboard input surface
//!
//! Key presses latch a velocity or flag on the simulation state; it stays
//! in effect until the matching release clears it. Events are applied in
//! arrival order, so the last writer wins.

use serde::{Deserialize, Serialize};

use super::state::{SimulationState, Viewport};
use crate::settings::Settings;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A
    Left,
    /// D
    Right,
    /// S
    Down,
    /// W, only while grounded
    Jump,
    /// F11
    ToggleFullscreen,
    /// F3
    ToggleDebug,
}

impl Key {
    /// Map a key name from the window layer (e.g. "a", "F11")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "a" | "left" => Some(Key::Left),
            "d" | "right" => Some(Key::Right),
            "s" | "down" => Some(Key::Down),
            "w" | "up" | "jump" => Some(Key::Jump),
            "f11" => Some(Key::ToggleFullscreen),
            "f3" => Some(Key::ToggleDebug),
            _ => None,
        }
    }
}

/// Events delivered by the window/UI thread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window resized or switched fullscreen mode
    Resized { width: f32, height: f32 },
}

/// Apply one input event to the simulation state
pub fn apply_event(state: &mut SimulationState, event: InputEvent, settings: &Settings) {
    match event {
        InputEvent::KeyDown(Key::Jump) => {
            if state.is_grounded() {
                state.player.vel.y = settings.jump_velocity;
            }
        }
        InputEvent::KeyDown(Key::Left) => {
            state.player.vel.x = -settings.move_speed;
            state.player.flip_horizontal = true;
        }
        InputEvent::KeyDown(Key::Right) => {
            state.player.vel.x = settings.move_speed;
            state.player.flip_horizontal = false;
        }
        InputEvent::KeyDown(Key::Down) => {
            state.player.vel.y = settings.down_velocity;
        }
        InputEvent::KeyDown(Key::ToggleFullscreen) => {
            state.fullscreen = !state.fullscreen;
            log::info!("Fullscreen {}", if state.fullscreen { "on" } else { "off" });
        }
        InputEvent::KeyDown(Key::ToggleDebug) => {
            state.debug_overlay = !state.debug_overlay;
            log::info!("Debug overlay {}", if state.debug_overlay { "on" } else { "off" });
        }
        InputEvent::KeyUp(Key::Left) | InputEvent::KeyUp(Key::Right) => {
            state.player.vel.x = 0.0;
        }
        InputEvent::KeyUp(Key::Down) => {
            state.player.vel.y = 0.0;
        }
        InputEvent::KeyUp(_) => {}
        InputEvent::Resized { width, height } => {
            log::debug!("Viewport resized to {}x{}", width, height);
            state.viewport = Viewport::new(width, height);
        }
    }
}
