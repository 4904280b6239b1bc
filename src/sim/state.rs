//! Entity registry and session state
//!
//! Everything a run owns lives on [`GameSession`]: gameplay-side mirrors
//! of the engine bodies, the progression tracker, and the seeded RNG that
//! makes every spawn decision reproducible. The physical truth (integrated
//! positions, contacts) stays engine-side.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::progress::Progress;
use super::spawn;
use crate::engine::{BodyHandle, EngineError, EngineHost};
use crate::tuning::Tuning;

/// Animation the renderer should play for the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Left,
    Right,
}

/// The controlled character.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: BodyHandle,
    pub motion: MotionState,
    /// Touching-down state, refreshed from the engine each tick.
    pub grounded: bool,
    /// None until the first collection tints the sprite.
    pub tint: Option<u32>,
    /// Compounding growth factor, applied to both axes.
    pub scale: f32,
    pub alive: bool,
}

/// A collectible. Deactivated members stay in the registry for reuse.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub body: BodyHandle,
    /// X this member respawns at on batch refill (y resets to 0).
    pub home_x: f32,
    pub bounce: f32,
    pub active: bool,
    /// Batch members drain toward replenishment; bonus drops do not.
    pub seeded: bool,
}

/// A bouncing threat. All of its motion state lives engine-side.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub body: BodyHandle,
}

/// Immovable collision target, created once at setup.
#[derive(Debug, Clone)]
pub struct Platform {
    pub body: BodyHandle,
    pub pos: glam::Vec2,
    pub scale: f32,
}

/// One run of the game: registry, progression, and spawn RNG.
pub struct GameSession {
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub player: Player,
    pub pickups: Vec<Pickup>,
    pub hazards: Vec<Hazard>,
    pub platforms: Vec<Platform>,
    pub(crate) progress: Progress,
}

impl GameSession {
    /// Build the initial world through the engine. Any body the engine
    /// refuses aborts construction; there is no degraded mode.
    pub fn new(
        engine: &mut dyn EngineHost,
        seed: u64,
        tuning: Tuning,
    ) -> Result<Self, EngineError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = spawn::populate(engine, &tuning, &mut rng)?;
        log::info!(
            "session ready: seed={seed}, pickups={}, hazards={}, platforms={}",
            world.pickups.len(),
            world.hazards.len(),
            world.platforms.len()
        );
        Ok(Self {
            seed,
            rng,
            tuning,
            player: world.player,
            pickups: world.pickups,
            hazards: world.hazards,
            platforms: world.platforms,
            progress: Progress::new(),
        })
    }

    /// Current score, monotone within a run.
    pub fn score(&self) -> u64 {
        self.progress.score()
    }

    /// Pickups collected this run.
    pub fn collected(&self) -> u32 {
        self.progress.collected()
    }

    /// True once the run has ended; ticks are no-ops from then on.
    pub fn is_game_over(&self) -> bool {
        self.progress.is_game_over()
    }

    /// Active members of the seeded batch; zero triggers replenishment.
    pub fn active_batch_pickups(&self) -> usize {
        self.pickups.iter().filter(|p| p.seeded && p.active).count()
    }

    /// All currently collectible pickups.
    pub fn active_pickups(&self) -> usize {
        self.pickups.iter().filter(|p| p.active).count()
    }

    pub(crate) fn pickup_index(&self, body: BodyHandle) -> Option<usize> {
        self.pickups.iter().position(|p| p.body == body)
    }
}
