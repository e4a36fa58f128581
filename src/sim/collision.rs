//! Collision detection and response against level platforms
//!
//! Every platform is tested every tick, in level order, with no early exit.
//! Three kinds of contact are resolved:
//! - obstacle bodies knock the player back horizontally on every overlapping tick
//! - regular bodies catch a falling player whose feet are near the top edge
//! - side walls push the player out horizontally by a small nudge

use super::level::{Level, Platform, WallGeometry};
use super::state::Player;
use crate::settings::Settings;

/// What happened during one resolver pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub landings: u32,
    pub knockbacks: u32,
    pub wall_pushes: u32,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.landings + self.knockbacks + self.wall_pushes > 0
    }
}

/// Resolver tuning, pulled out of `Settings` once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    pub landing_tolerance: f32,
    pub knockback: f32,
    pub wall_nudge: f32,
    pub walls: WallGeometry,
}

impl From<&Settings> for CollisionParams {
    fn from(settings: &Settings) -> Self {
        Self {
            landing_tolerance: settings.landing_tolerance,
            knockback: settings.obstacle_knockback,
            wall_nudge: settings.wall_nudge,
            walls: WallGeometry::from(settings),
        }
    }
}

/// Resolve the player against every platform in the level
pub fn resolve_collisions(player: &mut Player, level: &Level, params: &CollisionParams) -> CollisionReport {
    let mut report = CollisionReport::default();
    for platform in &level.platforms {
        resolve_platform(player, platform, params, &mut report);
    }
    report
}

/// Resolve body and walls of a single platform
fn resolve_platform(
    player: &mut Player,
    platform: &Platform,
    params: &CollisionParams,
    report: &mut CollisionReport,
) {
    let body = platform.bounds();
    if player.bounds().intersects(&body) {
        if platform.is_obstacle {
            player.pos.x -= params.knockback;
            report.knockbacks += 1;
        } else if player.vel.y > 0.0 && player.bottom() <= body.top() + params.landing_tolerance {
            // Falling with feet inside the landing band: stand on the top edge
            player.pos.y = body.top() - player.height();
            player.vel.y = 0.0;
            report.landings += 1;
        }
    }

    // Walls act regardless of obstacle status and after the body response
    if platform
        .left_wall(&params.walls)
        .is_some_and(|wall| player.bounds().intersects(&wall))
    {
        player.pos.x += params.wall_nudge;
        report.wall_pushes += 1;
    }
    if platform
        .right_wall(&params.walls)
        .is_some_and(|wall| player.bounds().intersects(&wall))
    {
        player.pos.x -= params.wall_nudge;
        report.wall_pushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::{SpriteSheet, StripOrientation};
    use glam::Vec2;

    /// 32x32 on-screen player
    fn player_at(x: f32, y: f32) -> Player {
        let sheet = SpriteSheet::new(64, 16, 16, 16, StripOrientation::Horizontal);
        Player::new(Vec2::new(x, y), sheet, 2.0, 10)
    }

    fn params() -> CollisionParams {
        CollisionParams::from(&Settings::default())
    }

    #[test]
    fn test_falling_player_lands_on_platform() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 20, false, true)]);
        let mut p = player_at(100.0, 400.0);
        p.vel.y = 5.0;

        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.landings, 1);
        assert_eq!(p.pos.y, 430.0 - p.height());
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_rising_player_passes_through() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 20, false, true)]);
        let mut p = player_at(100.0, 410.0);
        p.vel.y = -12.0;

        let report = resolve_collisions(&mut p, &level, &params());
        assert!(!report.any());
        assert_eq!(p.pos.y, 410.0);
        assert_eq!(p.vel.y, -12.0);
    }

    #[test]
    fn test_feet_below_landing_band_not_snapped() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 100, false, true)]);
        // Bottom at 475 > 430 + 40
        let mut p = player_at(100.0, 443.0);
        p.vel.y = 8.0;

        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.landings, 0);
        assert_eq!(p.pos.y, 443.0);
        assert_eq!(p.vel.y, 8.0);
    }

    #[test]
    fn test_landing_band_edge_is_inclusive() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 100, false, true)]);
        // Bottom exactly at 430 + 40
        let mut p = player_at(100.0, 438.0);
        p.vel.y = 3.0;

        assert_eq!(resolve_collisions(&mut p, &level, &params()).landings, 1);
        assert_eq!(p.pos.y, 398.0);
    }

    #[test]
    fn test_resting_on_top_edge_is_not_overlap() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 20, false, true)]);
        let mut p = player_at(100.0, 398.0);
        p.vel.y = 1.0;
        assert!(!resolve_collisions(&mut p, &level, &params()).any());
    }

    #[test]
    fn test_obstacle_knocks_back() {
        let level = Level::new(vec![Platform::new(300, 400, 60, 60, true, true)]);
        let mut p = player_at(310.0, 410.0);

        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.knockbacks, 1);
        assert_eq!(p.pos.x, 210.0);
    }

    #[test]
    fn test_obstacle_knockback_repeats_while_overlapping() {
        let level = Level::new(vec![Platform::new(0, 400, 800, 60, true, true)]);
        let mut p = player_at(600.0, 410.0);
        p.vel.y = 4.0;

        for expected in [500.0, 400.0, 300.0] {
            resolve_collisions(&mut p, &level, &params());
            assert_eq!(p.pos.x, expected);
        }
        // Obstacles never catch a falling player
        assert_eq!(p.vel.y, 4.0);
    }

    #[test]
    fn test_left_wall_pushes_right() {
        // Left wall spans x 190..200, y 350..420
        let level = Level::new(vec![Platform::new(200, 300, 100, 120, false, true).with_walls(true, false)]);
        let mut p = player_at(165.0, 370.0);

        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.wall_pushes, 1);
        assert_eq!(p.pos.x, 170.0);
    }

    #[test]
    fn test_right_wall_pushes_left() {
        // Right wall spans x 300..310, y 350..420
        let level = Level::new(vec![Platform::new(200, 300, 100, 120, false, true).with_walls(false, true)]);
        let mut p = player_at(305.0, 370.0);
        p.vel.y = -1.0;

        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.wall_pushes, 1);
        assert_eq!(p.pos.x, 300.0);
    }

    #[test]
    fn test_walls_apply_on_obstacles_too() {
        // Knockback moves the player from x=195 to x=95; the wall no longer overlaps
        let level = Level::new(vec![Platform::new(200, 300, 100, 120, true, true).with_walls(true, false)]);
        let mut p = player_at(195.0, 370.0);
        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.knockbacks, 1);
        assert_eq!(report.wall_pushes, 0);
        assert_eq!(p.pos.x, 95.0);

        // Touching only the wall, not the body
        let mut p = player_at(165.0, 370.0);
        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(report.knockbacks, 0);
        assert_eq!(report.wall_pushes, 1);
        assert_eq!(p.pos.x, 170.0);
    }

    #[test]
    fn test_invisible_platforms_still_collide() {
        let level = Level::new(vec![Platform::new(80, 430, 200, 20, false, false)]);
        let mut p = player_at(100.0, 400.0);
        p.vel.y = 5.0;
        assert_eq!(resolve_collisions(&mut p, &level, &params()).landings, 1);
    }

    #[test]
    fn test_every_platform_is_checked() {
        let level = Level::new(vec![
            Platform::new(0, 0, 10, 10, true, true),
            Platform::new(80, 430, 200, 20, false, true),
            Platform::new(600, 100, 50, 50, true, true),
        ]);
        let mut p = player_at(100.0, 400.0);
        p.vel.y = 5.0;
        let report = resolve_collisions(&mut p, &level, &params());
        assert_eq!(
            report,
            CollisionReport {
                landings: 1,
                knockbacks: 0,
                wall_pushes: 0
            }
        );
    }
}
