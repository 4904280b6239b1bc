//! Data-driven game balance
//!
//! Everything a designer would want to retune lives here. `Default`
//! mirrors the shipped values in [`crate::consts`]; a JSON override file
//! can replace any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Placement of one static platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub pos: Vec2,
    /// Sprite scale applied before the body is frozen in place.
    pub scale: f32,
}

/// Balance values for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,

    pub run_speed: f32,
    pub jump_velocity: f32,
    pub player_bounce: f32,
    pub player_spawn: Vec2,

    pub pickup_batch: usize,
    pub pickup_origin_x: f32,
    pub pickup_step_x: f32,
    pub pickup_bounce_min: f32,
    pub pickup_bounce_max: f32,

    pub initial_hazards: usize,
    pub hazard_spawn_y: f32,
    pub hazard_speed_max: i32,
    pub hazard_drift_y: f32,

    pub pickup_reward: u64,
    pub growth_every: u32,
    pub growth_factor: f32,

    pub platforms: Vec<PlatformSpec>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            run_speed: RUN_SPEED,
            jump_velocity: JUMP_VELOCITY,
            player_bounce: PLAYER_BOUNCE,
            player_spawn: Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            pickup_batch: PICKUP_BATCH,
            pickup_origin_x: PICKUP_ORIGIN_X,
            pickup_step_x: PICKUP_STEP_X,
            pickup_bounce_min: PICKUP_BOUNCE_MIN,
            pickup_bounce_max: PICKUP_BOUNCE_MAX,
            initial_hazards: INITIAL_HAZARDS,
            hazard_spawn_y: HAZARD_SPAWN_Y,
            hazard_speed_max: HAZARD_SPEED_MAX,
            hazard_drift_y: HAZARD_DRIFT_Y,
            pickup_reward: PICKUP_REWARD,
            growth_every: GROWTH_EVERY,
            growth_factor: GROWTH_FACTOR,
            platforms: PLATFORM_LAYOUT
                .iter()
                .map(|&(x, y, scale)| PlatformSpec {
                    pos: Vec2::new(x, y),
                    scale,
                })
                .collect(),
        }
    }
}

impl Tuning {
    /// Parse a tuning override file. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
