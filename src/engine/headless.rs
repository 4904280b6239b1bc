//! Recording engine host with no physics of its own
//!
//! Stands in for the real engine in tests and the demo driver: every
//! boundary call is recorded as body state or a counter, so a driver can
//! assert exactly what the core asked the engine to do. Nothing moves
//! unless the driver moves it.

use glam::Vec2;

use super::{BodyHandle, EngineError, EngineHost, Interaction, SpriteKind};

/// Recorded state of a single engine body.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub sprite: SpriteKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: f32,
    pub tint: Option<u32>,
    pub scale: (f32, f32),
    pub visible: bool,
    pub enabled: bool,
    pub is_static: bool,
    pub gravity_exempt: bool,
    pub collide_world_bounds: bool,
    pub grounded: bool,
}

impl BodyState {
    fn new(sprite: SpriteKind, pos: Vec2, is_static: bool, scale: f32) -> Self {
        Self {
            sprite,
            pos,
            vel: Vec2::ZERO,
            bounce: 0.0,
            tint: None,
            scale: (scale, scale),
            visible: true,
            enabled: true,
            is_static,
            gravity_exempt: false,
            collide_world_bounds: false,
            grounded: false,
        }
    }
}

/// Engine double that records boundary calls.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    bodies: Vec<BodyState>,
    pairs: Vec<(SpriteKind, SpriteKind, Interaction)>,
    paused: bool,
    pause_calls: u32,
    game_over_reveals: u32,
    /// When set, the next body creation fails (setup-abort testing).
    pub fail_next_create: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self, handle: BodyHandle) -> &BodyState {
        &self.bodies[handle.0 as usize]
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Driver-side control of the grounded query.
    pub fn set_grounded(&mut self, handle: BodyHandle, grounded: bool) {
        self.bodies[handle.0 as usize].grounded = grounded;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause_calls(&self) -> u32 {
        self.pause_calls
    }

    pub fn game_over_reveals(&self) -> u32 {
        self.game_over_reveals
    }

    pub fn registered_pairs(&self) -> &[(SpriteKind, SpriteKind, Interaction)] {
        &self.pairs
    }

    fn alloc(
        &mut self,
        sprite: SpriteKind,
        pos: Vec2,
        is_static: bool,
        scale: f32,
    ) -> Result<BodyHandle, EngineError> {
        if self.fail_next_create {
            self.fail_next_create = false;
            return Err(EngineError::BodyUnavailable(sprite));
        }
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(BodyState::new(sprite, pos, is_static, scale));
        Ok(handle)
    }

    fn state_mut(&mut self, handle: BodyHandle) -> &mut BodyState {
        &mut self.bodies[handle.0 as usize]
    }
}

impl EngineHost for HeadlessEngine {
    fn create_body(&mut self, sprite: SpriteKind, pos: Vec2) -> Result<BodyHandle, EngineError> {
        self.alloc(sprite, pos, false, 1.0)
    }

    fn create_static_body(
        &mut self,
        sprite: SpriteKind,
        pos: Vec2,
        scale: f32,
    ) -> Result<BodyHandle, EngineError> {
        self.alloc(sprite, pos, true, scale)
    }

    fn set_velocity(&mut self, body: BodyHandle, vel: Vec2) {
        self.state_mut(body).vel = vel;
    }

    fn set_velocity_x(&mut self, body: BodyHandle, vx: f32) {
        self.state_mut(body).vel.x = vx;
    }

    fn set_velocity_y(&mut self, body: BodyHandle, vy: f32) {
        self.state_mut(body).vel.y = vy;
    }

    fn set_bounce(&mut self, body: BodyHandle, restitution: f32) {
        self.state_mut(body).bounce = restitution;
    }

    fn set_collide_world_bounds(&mut self, body: BodyHandle, clamp: bool) {
        self.state_mut(body).collide_world_bounds = clamp;
    }

    fn set_gravity_exempt(&mut self, body: BodyHandle, exempt: bool) {
        self.state_mut(body).gravity_exempt = exempt;
    }

    fn set_tint(&mut self, body: BodyHandle, rgb: u32) {
        self.state_mut(body).tint = Some(rgb);
    }

    fn set_scale(&mut self, body: BodyHandle, sx: f32, sy: f32) {
        self.state_mut(body).scale = (sx, sy);
    }

    fn set_visible(&mut self, body: BodyHandle, visible: bool) {
        self.state_mut(body).visible = visible;
    }

    fn set_enabled(&mut self, body: BodyHandle, enabled: bool) {
        self.state_mut(body).enabled = enabled;
    }

    fn set_position(&mut self, body: BodyHandle, pos: Vec2) {
        self.state_mut(body).pos = pos;
    }

    fn touching_down(&self, body: BodyHandle) -> bool {
        self.bodies[body.0 as usize].grounded
    }

    fn register_pair(&mut self, a: SpriteKind, b: SpriteKind, interaction: Interaction) {
        self.pairs.push((a, b, interaction));
    }

    fn pause(&mut self) {
        self.paused = true;
        self.pause_calls += 1;
    }

    fn show_game_over(&mut self) {
        self.game_over_reveals += 1;
    }
}
