//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches a window,
//! a clock or a thread:
//! - One call to `tick` is one fixed step
//! - Platforms are visited in level order
//! - Rendering only ever sees a `RenderSnapshot`

pub mod collision;
pub mod input;
pub mod level;
pub mod parallax;
pub mod physics;
pub mod rect;
pub mod snapshot;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{CollisionParams, CollisionReport, resolve_collisions};
pub use input::{InputEvent, Key, apply_event};
pub use level::{Level, LevelError, Platform, WallGeometry};
pub use parallax::{LayerPlacement, ParallaxState};
pub use rect::Rect;
pub use snapshot::{DebugOverlay, PlatformStyle, PlatformView, PlayerView, RenderSnapshot};
pub use sprite::{SpriteAnimator, SpriteSheet, SpriteTransform, StripOrientation};
pub use state::{Player, SimulationState, Viewport};
pub use tick::{apply_events, tick};
