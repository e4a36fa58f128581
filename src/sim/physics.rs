//! Movement and gravity integration
//!
//! Edge handling is deliberately asymmetric: crossing the left, right or top
//! edge only nudges the player back a few pixels per tick, while crossing
//! the floor snaps them exactly onto it and cancels vertical velocity.

use super::state::{Player, Viewport};
use crate::settings::Settings;

/// Nudge the player back toward the viewport, then snap to the floor.
pub fn clamp_to_viewport(player: &mut Player, viewport: Viewport, settings: &Settings) {
    if player.pos.x < 0.0 {
        player.pos.x += settings.edge_nudge_x;
    }
    if player.pos.y < 0.0 {
        player.pos.y += settings.edge_nudge_y;
    }
    if player.pos.x > viewport.width - player.width() {
        player.pos.x -= settings.edge_nudge_x;
    }
    snap_to_floor(player, viewport);
}

/// Apply gravity, then move by the current velocity.
pub fn integrate(player: &mut Player, settings: &Settings) {
    player.vel.y += settings.gravity;
    player.pos += player.vel;
}

/// Stand the player on the floor if they sank below it.
///
/// Returns true if a snap happened.
pub fn snap_to_floor(player: &mut Player, viewport: Viewport) -> bool {
    let floor = viewport.height - player.height();
    if player.pos.y > floor {
        player.pos.y = floor;
        player.vel.y = 0.0;
        true
    } else {
        false
    }
}
