//! Scamper - gameplay core for a 2D platform collect-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic gameplay rules (session state, spawning, collision policy)
//! - `engine`: Boundary to the external arcade physics/rendering engine
//! - `tuning`: Data-driven game balance
//!
//! The crate never integrates motion, draws, or reads the keyboard. It
//! tells the engine what each body should do, and the engine tells it
//! which bodies touched.

pub mod engine;
pub mod sim;
pub mod tuning;

pub use sim::{GameSession, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World width in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    /// World height in pixels
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Horizontal run speed (pixels/s)
    pub const RUN_SPEED: f32 = 160.0;
    /// Jump impulse (negative y is up)
    pub const JUMP_VELOCITY: f32 = -330.0;
    /// Player landing bounce
    pub const PLAYER_BOUNCE: f32 = 0.2;
    /// Player spawn point
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 450.0);

    /// Pickups in the seeded batch
    pub const PICKUP_BATCH: usize = 12;
    /// X of the first batch pickup
    pub const PICKUP_ORIGIN_X: f32 = 12.0;
    /// Column spacing between batch pickups
    pub const PICKUP_STEP_X: f32 = 70.0;
    /// Pickup bounce restitution bounds (randomized per spawn)
    pub const PICKUP_BOUNCE_MIN: f32 = 0.4;
    pub const PICKUP_BOUNCE_MAX: f32 = 0.8;

    /// Hazards alive at the start of a run
    pub const INITIAL_HAZARDS: usize = 3;
    /// Hazard spawn height
    pub const HAZARD_SPAWN_Y: f32 = 16.0;
    /// Hazard horizontal launch speed bound, sampled in [-MAX, MAX]
    pub const HAZARD_SPEED_MAX: i32 = 200;
    /// Hazard constant downward drift (pixels/s, gravity-exempt)
    pub const HAZARD_DRIFT_Y: f32 = 20.0;

    /// Score awarded per pickup
    pub const PICKUP_REWARD: u64 = 10;
    /// Collections between player growth steps
    pub const GROWTH_EVERY: u32 = 5;
    /// Scale multiplier per growth step (compounding)
    pub const GROWTH_FACTOR: f32 = 1.1;

    /// Player tint cycle, applied as `TINT_PALETTE[collected % len]`
    pub const TINT_PALETTE: [u32; 7] = [
        0xff0000, 0xff7f00, 0xffff00, 0x00ff00, 0x0000ff, 0x4b0082, 0x8a2be2,
    ];
    /// Tint applied on defeat
    pub const DEFEAT_TINT: u32 = 0xff0000;

    /// Static platform layout: (x, y, sprite scale)
    pub const PLATFORM_LAYOUT: [(f32, f32, f32); 4] = [
        (400.0, 568.0, 2.0),
        (600.0, 400.0, 1.0),
        (50.0, 250.0, 1.0),
        (750.0, 220.0, 1.0),
    ];
}
