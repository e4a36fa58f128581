//! Fixed timestep simulation tick
//!
//! One call advances the scene by exactly one tick. The step order is fixed:
//! animation, parallax, edge clamps, gravity and movement, platform
//! collisions, then a final floor clamp so nothing sinks through the ground.

use super::collision::{CollisionParams, CollisionReport, resolve_collisions};
use super::input::{InputEvent, apply_event};
use super::level::Level;
use super::physics::{clamp_to_viewport, integrate, snap_to_floor};
use super::state::SimulationState;
use crate::settings::Settings;

/// Apply pending input events, in arrival order
pub fn apply_events(
    state: &mut SimulationState,
    events: impl IntoIterator<Item = InputEvent>,
    settings: &Settings,
) {
    for event in events {
        apply_event(state, event, settings);
    }
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimulationState, level: &Level, settings: &Settings) -> CollisionReport {
    state.time_ticks += 1;

    state.player.animator.advance();
    state.parallax.update(settings.scroll_step);

    clamp_to_viewport(&mut state.player, state.viewport, settings);
    integrate(&mut state.player, settings);

    let report = resolve_collisions(&mut state.player, level, &CollisionParams::from(settings));
    if report.any() {
        log::trace!("tick {}: {:?}", state.time_ticks, report);
    }

    snap_to_floor(&mut state.player, state.viewport);
    report
}
