//! Boundary to the external physics/rendering engine
//!
//! The gameplay core never integrates motion or resolves contacts itself.
//! It creates bodies, drives their attributes through [`EngineHost`], and
//! registers which body classes collide or overlap; the engine integrates
//! the world and reports contacts back through the handlers in
//! [`crate::sim::collision`].

pub mod headless;

pub use headless::HeadlessEngine;

use glam::Vec2;
use thiserror::Error;

/// Opaque handle to an engine-owned body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Sprite/shape class attached to a body at creation.
///
/// Also the granularity at which collide/overlap pairs are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Pickup,
    Hazard,
    Platform,
}

/// How a registered pair of body classes interacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Solid contact with collision response
    Collide,
    /// Intersection test without collision response
    Overlap,
}

/// Engine-side failures. A body the engine refuses at setup aborts session
/// construction; the core never runs with missing bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine refused to allocate a body for {0:?}")]
    BodyUnavailable(SpriteKind),
}

/// Operations the gameplay core invokes on the engine.
pub trait EngineHost {
    /// Create a dynamic body at `pos`.
    fn create_body(&mut self, sprite: SpriteKind, pos: Vec2) -> Result<BodyHandle, EngineError>;
    /// Create an immovable body at `pos` with the given sprite scale.
    fn create_static_body(
        &mut self,
        sprite: SpriteKind,
        pos: Vec2,
        scale: f32,
    ) -> Result<BodyHandle, EngineError>;

    fn set_velocity(&mut self, body: BodyHandle, vel: Vec2);
    fn set_velocity_x(&mut self, body: BodyHandle, vx: f32);
    fn set_velocity_y(&mut self, body: BodyHandle, vy: f32);
    /// Restitution applied on bounce; 1.0 is fully elastic.
    fn set_bounce(&mut self, body: BodyHandle, restitution: f32);
    fn set_collide_world_bounds(&mut self, body: BodyHandle, clamp: bool);
    /// Exempt the body from gravity integration.
    fn set_gravity_exempt(&mut self, body: BodyHandle, exempt: bool);
    fn set_tint(&mut self, body: BodyHandle, rgb: u32);
    fn set_scale(&mut self, body: BodyHandle, sx: f32, sy: f32);
    fn set_visible(&mut self, body: BodyHandle, visible: bool);
    /// Add or remove the body from physics simulation.
    fn set_enabled(&mut self, body: BodyHandle, enabled: bool);
    /// Teleport the body (used when a pickup re-enters simulation).
    fn set_position(&mut self, body: BodyHandle, pos: Vec2);
    /// True while the body rests on a surface beneath it.
    fn touching_down(&self, body: BodyHandle) -> bool;

    /// Declare that two body classes interact.
    fn register_pair(&mut self, a: SpriteKind, b: SpriteKind, interaction: Interaction);

    /// Freeze the physics simulation.
    fn pause(&mut self);
    /// Reveal the run-ended banner.
    fn show_game_over(&mut self);
}
